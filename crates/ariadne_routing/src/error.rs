use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("Failed to read map fragment")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode map fragment: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures reported by whatever fetches fragments on behalf of the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Map provider {0} is unavailable")]
    Unavailable(String),
    #[error("Map provider rate limited the request")]
    RateLimited,
    #[error("Map provider failed: {0}")]
    Failed(String),
}

impl From<FragmentError> for ProviderError {
    fn from(error: FragmentError) -> Self {
        ProviderError::Failed(error.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown search algorithm '{0}'")]
pub struct ParseAlgorithmError(pub String);
