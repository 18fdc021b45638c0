//! 消息总线领域层基础库（sagabus-domain）
//!
//! 为 CQRS/事件溯源消息总线提供元数据驱动的事件路由核心：
//! - 消息模型（`message`）：命令、事件、错误消息及其类别；
//! - 元数据接口（`metadata`）：方法标签来源与类型目录；
//! - saga 事件绑定（`saga`）：提取并校验 saga 方法上的事件绑定声明；
//! - 日志协作者（`logging`）：注入式日志接口与 `tracing` 默认实现；
//! - 存储侧协作者（`persist`）：二进制载荷解码。
//!
//! 典型用法：
//! 1. 提供 `MetadataSource` 与 `TypeCatalog` 实现（或使用内存实现）；
//! 2. 以二者与一个 `Logger` 构造 `SagaEventListenersReader`；
//! 3. 调用 `extract_event_bindings` 取得通过校验的绑定，交由 saga 分发层按标识路由事件。
//!
pub mod error;
pub mod logging;
pub mod message;
pub mod metadata;
pub mod persist;
pub mod saga;
