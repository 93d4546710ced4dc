use thiserror::Error;

/// Mood shop client errors
#[derive(Error, Debug)]
pub enum ShopError {
    /// Transport failure, non-2xx status, undecodable body or `success: false`.
    #[error("API request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Storage Error: {0}")]
    StorageError(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl ShopError {
    pub(crate) fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        ShopError::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a failed request, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShopError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type for mood shop operations
pub type ShopResult<T> = Result<T, ShopError>;
