//! 元数据接口（metadata）
//!
//! 绑定校验所依赖的外部协作者：
//! - `MetadataSource`：给定类型名，返回其每个方法声明的标签与参数列表；
//! - `TypeCatalog`：回答某个类型名是否存在、是否具备 Event 能力。
//!
//! 内省/标签语法本身不在本 crate 范围内，这里只约定结构化的输出形态，
//! 并提供基于内存的实现用于测试与本地装配。

mod annotation;
mod catalog;
mod source;

pub use annotation::{DeclaredTag, MethodAnnotation, ParameterDescriptor, SagaListenerTag};
pub use catalog::{InMemoryTypeCatalog, TypeCatalog};
pub use source::{InMemoryMetadataSource, MetadataSource};
