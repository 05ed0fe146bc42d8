use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Corrupted store: {0}")]
    CorruptedStore(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a repository-layer error. Deserialization failures mean the
    /// persisted document itself is malformed and surface as
    /// `CorruptedStore`; everything else is a plain `StoreError`.
    pub fn from_store(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        if let Some(json_err) = err.downcast_ref::<serde_json::Error>() {
            ApiError::CorruptedStore(json_err.to_string())
        } else {
            ApiError::StoreError(err.to_string())
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ApiError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ApiError::from_store(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}
