//! 执行策略（ExecutionPolicy）
//!
//! 按消息类别（命令/事件/错误）施加的横切行为：是否记录载荷、写入哪个日志通道。
//! 类别是封闭的三路分派，新增类别必须扩展该枚举，由编译器检查所有 `match`。
//!
use crate::error::AppError;
use bon::Builder;
use sagabus_domain::message::MessageCategory;
use serde::{Deserialize, Serialize};

/// 默认日志通道
pub const DEFAULT_LOGGER_CHANNEL: &str = "default";

fn default_logger_channel() -> String {
    DEFAULT_LOGGER_CHANNEL.to_string()
}

/// 各类别共享的策略选项
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOptions {
    /// 开始执行时是否在日志中附带消息载荷
    #[builder(default)]
    #[serde(default)]
    pub log_payload: bool,
    /// 日志通道
    #[builder(default = default_logger_channel(), into)]
    #[serde(default = "default_logger_channel")]
    pub logger_channel: String,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            log_payload: false,
            logger_channel: default_logger_channel(),
        }
    }
}

/// 执行策略
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ExecutionPolicy {
    Command(PolicyOptions),
    Event(PolicyOptions),
    Error(PolicyOptions),
}

impl ExecutionPolicy {
    pub fn for_category(category: MessageCategory, options: PolicyOptions) -> Self {
        match category {
            MessageCategory::Command => ExecutionPolicy::Command(options),
            MessageCategory::Event => ExecutionPolicy::Event(options),
            MessageCategory::Error => ExecutionPolicy::Error(options),
        }
    }

    pub fn category(&self) -> MessageCategory {
        match self {
            ExecutionPolicy::Command(_) => MessageCategory::Command,
            ExecutionPolicy::Event(_) => MessageCategory::Event,
            ExecutionPolicy::Error(_) => MessageCategory::Error,
        }
    }

    pub fn options(&self) -> &PolicyOptions {
        match self {
            ExecutionPolicy::Command(o) | ExecutionPolicy::Event(o) | ExecutionPolicy::Error(o) => o,
        }
    }

    pub fn log_payload(&self) -> bool {
        self.options().log_payload
    }

    pub fn logger_channel(&self) -> &str {
        &self.options().logger_channel
    }
}

/// 执行策略配置：每个类别一份选项，缺省字段取默认值
///
/// ```rust
/// use sagabus_application::execution_policy::ExecutionPolicyConfig;
/// use sagabus_domain::message::MessageCategory;
///
/// let cfg = ExecutionPolicyConfig::from_json(
///     r#"{ "command": { "log_payload": true, "logger_channel": "commands" } }"#,
/// )
/// .unwrap();
/// assert!(cfg.policy(MessageCategory::Command).log_payload());
/// assert_eq!(cfg.policy(MessageCategory::Event).logger_channel(), "default");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionPolicyConfig {
    pub command: PolicyOptions,
    pub event: PolicyOptions,
    pub error: PolicyOptions,
}

impl ExecutionPolicyConfig {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 构造指定类别的执行策略
    pub fn policy(&self, category: MessageCategory) -> ExecutionPolicy {
        let options = match category {
            MessageCategory::Command => &self.command,
            MessageCategory::Event => &self.event,
            MessageCategory::Error => &self.error,
        };
        ExecutionPolicy::for_category(category, options.clone())
    }
}
