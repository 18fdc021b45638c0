//! 消息模型（Message）
//!
//! 总线上流转的三类消息：命令、事件与错误消息。
//! 每类消息在执行期都对应一份独立的执行策略，由 `MessageCategory` 区分。

mod business_context;
mod message_trait;

pub use business_context::BusinessContext;
pub use message_trait::{Command, ErrorMessage, Event, Message, MessageCategory};
