use crate::policy_registry::ExecutionPolicyRegistry;
use sagabus_domain::message::BusinessContext;

/// 消息执行上下文
///
/// 传递给处理器的每条消息执行环境。完整分发链路中的上下文携带执行策略注册表，
/// 脱离分发链路使用的精简上下文则没有，此时所有与策略相关的行为都是空操作。
pub trait ExecutionContext: Send + Sync {
    /// 业务语境（关联追踪、审计主体、操作因果）
    fn business(&self) -> &BusinessContext;

    /// 执行策略注册表；不支持策略的上下文返回 `None`
    fn policies(&self) -> Option<&ExecutionPolicyRegistry> {
        None
    }
}

/// 内核上下文：一次消息处理的完整上下文，支持执行策略
///
/// 典型用法：
/// ```rust
/// use sagabus_application::context::{ExecutionContext, KernelContext};
/// use sagabus_domain::message::BusinessContext;
///
/// let ctx = KernelContext::new(
///     BusinessContext::builder()
///         .correlation_id("cor-123".into())
///         .build(),
/// );
/// assert!(ctx.policies().is_some_and(|p| p.is_empty()));
/// assert_eq!(ctx.business().correlation_id(), Some("cor-123"));
/// ```
#[derive(Debug)]
pub struct KernelContext {
    biz: BusinessContext,
    policies: ExecutionPolicyRegistry,
}

impl KernelContext {
    pub fn new(biz: BusinessContext) -> Self {
        Self {
            biz,
            policies: ExecutionPolicyRegistry::new(),
        }
    }
}

impl Default for KernelContext {
    fn default() -> Self {
        Self::new(BusinessContext::default())
    }
}

impl ExecutionContext for KernelContext {
    fn business(&self) -> &BusinessContext {
        &self.biz
    }

    fn policies(&self) -> Option<&ExecutionPolicyRegistry> {
        Some(&self.policies)
    }
}

/// 精简上下文：脱离完整分发链路时使用，不支持执行策略
#[derive(Clone, Debug, Default)]
pub struct BareContext {
    /// 业务语境（链路追踪、审计主体、操作因果）
    pub biz: BusinessContext,
}

impl ExecutionContext for BareContext {
    fn business(&self) -> &BusinessContext {
        &self.biz
    }
}
