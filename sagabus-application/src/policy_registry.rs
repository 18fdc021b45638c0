//! 执行策略注册表（ExecutionPolicyRegistry）
//!
//! 作用域为一次消息处理上下文：上下文创建时为空，任务首次执行时登记自身策略，
//! 上下文结束时随之丢弃。登记采用“插入即生效、先到者胜”的语义，
//! 同一类别的后续登记不会替换已有策略，保证上下文生命周期内策略实例稳定。
//!
use crate::execution_policy::ExecutionPolicy;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sagabus_domain::message::{Message, MessageCategory};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ExecutionPolicyRegistry {
    policies: DashMap<MessageCategory, Arc<ExecutionPolicy>>,
}

impl ExecutionPolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按策略的类别登记；该类别已有策略时不做任何修改并返回 `false`
    pub fn put(&self, policy: Arc<ExecutionPolicy>) -> bool {
        match self.policies.entry(policy.category()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(policy);
                true
            }
        }
    }

    pub fn get(&self, category: MessageCategory) -> Option<Arc<ExecutionPolicy>> {
        self.policies.get(&category).map(|p| p.value().clone())
    }

    /// 按消息的类别查找策略
    pub fn get_for<M: Message>(&self, _message: &M) -> Option<Arc<ExecutionPolicy>> {
        self.get(M::CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
