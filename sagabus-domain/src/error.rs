//! 领域层统一错误定义
//!
//! 区分两类失败：
//! - `DomainError`：硬失败（如元数据源无法解析 saga 类型），通过 `?` 向调用方传播；
//! - `BindingError`：单个事件绑定声明的校验失败，属于软失败，
//!   由 saga 监听器读取器在声明粒度捕获、记录并剔除，从不向调用方抛出。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 元数据 ---
    #[error("unknown type: {type_name}")]
    UnknownType { type_name: String },

    // --- 存储 ---
    #[error("binary decode error: {reason}")]
    BinaryDecode { reason: String },
}

impl DomainError {
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        DomainError::UnknownType {
            type_name: type_name.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl From<hex::FromHexError> for DomainError {
    fn from(err: hex::FromHexError) -> Self {
        DomainError::BinaryDecode {
            reason: err.to_string(),
        }
    }
}

/// saga 事件绑定声明的校验失败
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error(r#"unsupported binding kind specified ("{kind}") for saga "{saga}""#)]
    UnsupportedBindingKind { saga: String, kind: String },

    #[error(r#""identity_field" value must be specified for saga "{saga}" (method "{method}")"#)]
    MissingIdentityField { saga: String, method: String },

    #[error("{}", describe_identity_type(.saga, .method, .identity_type))]
    MissingOrUnresolvableIdentityType {
        saga: String,
        method: String,
        identity_type: String,
    },

    #[error(
        r#"invalid handler signature: the event handler "{method}" for saga "{saga}" should take as its first argument an object that implements the Event capability"#
    )]
    InvalidHandlerSignature { saga: String, method: String },
}

impl BindingError {
    /// 稳定的规则编码，用于日志检索与告警
    pub fn code(&self) -> &'static str {
        match self {
            BindingError::UnsupportedBindingKind { .. } => "unsupported_binding_kind",
            BindingError::MissingIdentityField { .. } => "missing_identity_field",
            BindingError::MissingOrUnresolvableIdentityType { .. } => {
                "missing_or_unresolvable_identity_type"
            }
            BindingError::InvalidHandlerSignature { .. } => "invalid_handler_signature",
        }
    }

    /// 完整诊断信息：`<规则编码>: <描述>`
    pub fn diagnostic(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

fn describe_identity_type(saga: &str, method: &str, identity_type: &str) -> String {
    if identity_type.is_empty() {
        format!(r#""identity_type" value must be specified for saga "{saga}" (method "{method}")"#)
    } else {
        format!(
            r#""identity_type" value must reference an existing identity type for saga "{saga}" (method "{method}", got "{identity_type}")"#
        )
    }
}
