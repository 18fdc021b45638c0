use crate::{context::ExecutionContext, error::AppError};
use async_trait::async_trait;
use sagabus_domain::message::Message;

/// 消息处理器：承载业务逻辑，结果与错误通过返回值与上下文自行上报
#[async_trait]
pub trait MessageHandler<M>: Send + Sync
where
    M: Message,
{
    async fn handle(&self, ctx: &dyn ExecutionContext, message: M) -> Result<(), AppError>;
}
