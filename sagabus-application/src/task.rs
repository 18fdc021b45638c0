//! 任务执行器（Task）
//!
//! 将单个业务处理器与其静态指定的执行策略包装在一起：
//! - 首次执行时向上下文登记自身策略（按策略类别）；
//! - 调用处理器前，按上下文中该消息类别的策略输出一行 debug 日志，
//!   策略要求时附带消息载荷；
//! - 调用处理器，结果由业务逻辑自行负责。
//!
//! 上下文不支持策略或该类别尚无策略时，日志与登记均为空操作，不会报错。
//!
use crate::context::ExecutionContext;
use crate::error::AppError;
use crate::execution_policy::ExecutionPolicy;
use crate::handler::MessageHandler;
use sagabus_domain::logging::LoggerProvider;
use sagabus_domain::message::Message;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

pub struct Task<M, H> {
    policy: Arc<ExecutionPolicy>,
    handler: H,
    loggers: Arc<dyn LoggerProvider>,
    _message: PhantomData<fn(M)>,
}

impl<M, H> Task<M, H>
where
    M: Message,
    H: MessageHandler<M>,
{
    pub fn new(policy: ExecutionPolicy, handler: H, loggers: Arc<dyn LoggerProvider>) -> Self {
        Self {
            policy: Arc::new(policy),
            handler,
            loggers,
            _message: PhantomData,
        }
    }

    pub fn policy(&self) -> &Arc<ExecutionPolicy> {
        &self.policy
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// 执行：登记策略 → 记录入站消息 → 调用处理器
    pub async fn execute(&self, message: M, ctx: &dyn ExecutionContext) -> Result<(), AppError> {
        self.register_policy_with_context(ctx);
        self.log_incoming(&message, ctx);
        self.handler.handle(ctx, message).await
    }

    /// 按上下文中该消息类别的策略记录入站消息
    pub fn log_incoming(&self, message: &M, ctx: &dyn ExecutionContext) {
        let Some(policy) = ctx.policies().and_then(|p| p.get_for(message)) else {
            return;
        };

        let mut line = format!(r#"Start "{}" message execution"#, M::NAME);
        if policy.log_payload() {
            line.push_str(&format!(r#" with payload "{}""#, payload_as_string(message)));
        }

        self.loggers.logger(policy.logger_channel()).debug(&line);
    }

    /// 将自身策略按类别登记到上下文；同类别已有策略时保持不变
    pub fn register_policy_with_context(&self, ctx: &dyn ExecutionContext) {
        if let Some(policies) = ctx.policies() {
            policies.put(self.policy.clone());
        }
    }
}

/// 消息载荷的字符串表示；无法序列化时以占位文本代替，不影响消息处理
pub fn payload_as_string<T: Serialize + ?Sized>(message: &T) -> String {
    serde_json::to_string(message)
        .unwrap_or_else(|e| format!("<unrepresentable payload: {e}>"))
}
