use fuo_core::ProviderError;
use thiserror::Error;

/// Failures raised while talking to the vendor.
///
/// None of these are retried; the host decides what to do with them.
#[derive(Debug, Error)]
pub enum MiguError {
    #[error("remote request failed with HTTP {status}")]
    RemoteRequestFailed { status: u16 },
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    #[error("failed to parse response: {0}")]
    ParseFailure(#[from] serde_json::Error),
    #[error("unsupported search type: {0}")]
    UnsupportedSearchType(String),
    #[error("field '{0}' not found on search result")]
    FieldNotFound(String),
    #[error("transport error: {0}")]
    Transport(String),
}

pub type MiguResult<T> = Result<T, MiguError>;

impl From<MiguError> for ProviderError {
    fn from(err: MiguError) -> Self {
        match err {
            MiguError::RemoteRequestFailed { status } => {
                ProviderError::RemoteRequestFailed { status }
            }
            MiguError::ResourceNotFound(entity) => ProviderError::NotFound { entity },
            MiguError::ParseFailure(e) => ProviderError::Parse {
                message: e.to_string(),
            },
            MiguError::UnsupportedSearchType(kind) => ProviderError::NotSupported {
                operation: format!("search type {kind}"),
            },
            MiguError::Transport(message) => ProviderError::NetworkError { message },
            other @ MiguError::FieldNotFound(_) => ProviderError::Other {
                message: other.to_string(),
            },
        }
    }
}
