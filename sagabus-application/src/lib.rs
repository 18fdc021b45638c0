pub mod context;
pub mod error;
pub mod execution_policy;
pub mod handler;
pub mod policy_registry;
pub mod task;

pub use context::{BareContext, ExecutionContext, KernelContext};
pub use execution_policy::{ExecutionPolicy, ExecutionPolicyConfig, PolicyOptions};
pub use policy_registry::ExecutionPolicyRegistry;
pub use task::Task;
