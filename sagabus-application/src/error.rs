use sagabus_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    /// 业务处理器返回的失败
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}
