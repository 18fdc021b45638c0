//! saga 事件绑定（saga）
//!
//! 从 saga 类型的方法元数据中提取“该方法处理某事件，并按某标识字段关联”的绑定声明，
//! 逐条校验并输出通过校验的绑定。校验是尽力而为的：单条声明的缺陷被记录并剔除，
//! 不影响同一 saga 上其余声明的激活。

mod binding;
mod listener_reader;

pub use binding::{AcceptedBinding, BindingDeclaration};
pub use listener_reader::{ExtractionReport, SagaEventListenersReader};
