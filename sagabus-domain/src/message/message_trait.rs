use serde::{Deserialize, Serialize};
use std::fmt;

/// 消息类别：决定执行期使用哪一份执行策略
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    Command,
    Event,
    Error,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Command => "command",
            MessageCategory::Event => "event",
            MessageCategory::Error => "error",
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 总线消息
///
/// 关联常量：
/// - `NAME`：消息的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`；
/// - `CATEGORY`：消息类别。
///
/// 要求 `Serialize`，以便在开启载荷日志时输出消息字段。
pub trait Message: Serialize + Send + Sync + 'static {
    const NAME: &'static str;

    const CATEGORY: MessageCategory;
}

/// 命令：表达意图的写操作请求
pub trait Command: Message {}

/// 事件：已发生的事实。saga 监听器的第一个参数必须具备该能力
pub trait Event: Message {}

/// 错误消息：某条消息执行失败后交由错误处理器消费
pub trait ErrorMessage: Message {}
