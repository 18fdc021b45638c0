use crate::message::Event;
use dashmap::DashMap;

/// 类型目录：类型存在性与 Event 能力检查
pub trait TypeCatalog: Send + Sync {
    /// 给定类型名，是否为已知、可加载的类型
    fn type_exists(&self, type_name: &str) -> bool;

    /// 给定类型名，是否实现了 Event 能力
    fn implements_event(&self, type_name: &str) -> bool;
}

/// 基于内存的类型目录
/// - 以类型名为键，值表示是否具备 Event 能力
#[derive(Default)]
pub struct InMemoryTypeCatalog {
    types: DashMap<String, bool>,
}

impl InMemoryTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册普通类型（如标识类型、命令）
    pub fn register_type(&self, type_name: impl Into<String>) -> &Self {
        self.types.entry(type_name.into()).or_insert(false);
        self
    }

    /// 以名称注册具备 Event 能力的类型
    pub fn register_event_name(&self, type_name: impl Into<String>) -> &Self {
        self.types.insert(type_name.into(), true);
        self
    }

    /// 注册事件类型，使用其稳定名称 `E::NAME`
    pub fn register_event<E: Event>(&self) -> &Self {
        self.register_event_name(E::NAME)
    }
}

impl TypeCatalog for InMemoryTypeCatalog {
    fn type_exists(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    fn implements_event(&self, type_name: &str) -> bool {
        self.types.get(type_name).is_some_and(|e| *e.value())
    }
}
