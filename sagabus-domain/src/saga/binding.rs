use crate::metadata::{DeclaredTag, MethodAnnotation, ParameterDescriptor};

/// 单个方法的原始绑定声明（每次校验时新建，不持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDeclaration {
    pub saga_type: String,
    pub method: String,
    pub tag: DeclaredTag,
    pub parameters: Vec<ParameterDescriptor>,
}

impl BindingDeclaration {
    pub fn from_annotation(saga_type: &str, annotation: MethodAnnotation) -> Self {
        Self {
            saga_type: saga_type.to_string(),
            method: annotation.method,
            tag: annotation.tag,
            parameters: annotation.parameters,
        }
    }
}

/// 通过校验的绑定
///
/// 不变量：`identity_field` 非空；`identity_type` 非空且可解析为已知类型；
/// 方法第一个参数的类型具备 Event 能力。构造后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedBinding {
    saga_type: String,
    method: String,
    event_type: String,
    identity_field: String,
    identity_type: String,
    parameters: Vec<ParameterDescriptor>,
}

impl AcceptedBinding {
    /// 仅由监听器读取器在全部校验通过后构造
    pub(crate) fn new(
        declaration: BindingDeclaration,
        event_type: String,
        identity_field: String,
        identity_type: String,
    ) -> Self {
        Self {
            saga_type: declaration.saga_type,
            method: declaration.method,
            event_type,
            identity_field,
            identity_type,
            parameters: declaration.parameters,
        }
    }

    pub fn saga_type(&self) -> &str {
        &self.saga_type
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// 处理的事件类型（第一个参数的类型名）
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn identity_field(&self) -> &str {
        &self.identity_field
    }

    pub fn identity_type(&self) -> &str {
        &self.identity_type
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }
}
