use bon::Builder;
use serde::{Deserialize, Serialize};

/// saga 事件监听器标签
#[derive(Builder, Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SagaListenerTag {
    /// 事件上承载 saga 关联标识的属性名
    #[builder(default, into)]
    pub identity_field: String,
    /// 标识值的完整类型名
    #[builder(default, into)]
    pub identity_type: String,
}

/// 方法上声明的标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeclaredTag {
    SagaListener(SagaListenerTag),
    /// 其它种类的声明（如命令处理器），与 saga 事件绑定无关
    Other { kind: String },
}

impl DeclaredTag {
    pub fn kind(&self) -> &str {
        match self {
            DeclaredTag::SagaListener(_) => "saga_listener",
            DeclaredTag::Other { kind } => kind,
        }
    }
}

/// 方法参数描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// 参数声明的类型名；标量或未声明类型时为 `None`
    pub type_name: Option<String>,
}

impl ParameterDescriptor {
    pub fn typed(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
        }
    }
}

/// 元数据源针对单个方法的原始输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodAnnotation {
    pub method: String,
    pub tag: DeclaredTag,
    pub parameters: Vec<ParameterDescriptor>,
}

impl MethodAnnotation {
    pub fn new(
        method: impl Into<String>,
        tag: DeclaredTag,
        parameters: Vec<ParameterDescriptor>,
    ) -> Self {
        Self {
            method: method.into(),
            tag,
            parameters,
        }
    }
}
