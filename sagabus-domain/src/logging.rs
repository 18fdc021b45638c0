//! 日志协作者（Logger）
//!
//! 组件在构造时注入日志协作者，而不是通过全局注册表按通道名查找：
//! - `Logger`：按级别记录一行日志，调用方视其为不会失败；
//! - `LoggerProvider`：按通道名（如执行策略中的 `logger_channel`）解析 `Logger`；
//! - `TracingLogger`：默认实现，转发到 `tracing`，通道作为结构化字段；
//! - `MemoryLogger`：内存实现，记录所有日志行，典型用途：测试环境、示例与本地开发。
//!
use std::sync::{Arc, Mutex};

/// 日志级别（本层仅使用 error 与 debug）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Debug,
}

/// 日志协作者
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);

    fn debug(&self, message: &str);
}

/// 通道 -> Logger 的解析器
pub trait LoggerProvider: Send + Sync {
    fn logger(&self, channel: &str) -> Arc<dyn Logger>;
}

/// 转发到 `tracing` 的日志实现
#[derive(Clone, Debug)]
pub struct TracingLogger {
    channel: String,
}

impl TracingLogger {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(channel = %self.channel, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(channel = %self.channel, "{message}");
    }
}

/// 为每个通道创建 `TracingLogger`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLoggerProvider;

impl LoggerProvider for TracingLoggerProvider {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        Arc::new(TracingLogger::new(channel))
    }
}

/// 一条被记录的日志
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub channel: String,
    pub level: LogLevel,
    pub message: String,
}

/// 内存日志：所有通道共享同一份记录
#[derive(Clone, Default)]
pub struct MemoryLogger {
    channel: String,
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn lines_at(&self, level: LogLevel) -> Vec<LogLine> {
        self.lines()
            .into_iter()
            .filter(|l| l.level == level)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    fn record(&self, level: LogLevel, message: &str) {
        // 记录失败（锁中毒）时静默丢弃，日志协作者不得向调用方抛错
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(LogLine {
                channel: self.channel.clone(),
                level,
                message: message.to_string(),
            });
        }
    }
}

impl Logger for MemoryLogger {
    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }

    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, message);
    }
}

impl LoggerProvider for MemoryLogger {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        Arc::new(MemoryLogger {
            channel: channel.to_string(),
            lines: self.lines.clone(),
        })
    }
}
