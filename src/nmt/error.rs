/// Error types for the neural translation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NmtError {
    /// Missing or invalid provider configuration (token, model id, URL)
    ConfigError(String),
    /// The request could not be sent or the connection failed
    NetworkError(String),
    /// The provider answered with an error or an unusable payload
    TranslationError(String),
}

impl std::fmt::Display for NmtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NmtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            NmtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            NmtError::TranslationError(msg) => write!(f, "NMT translation failed: {}", msg),
        }
    }
}

impl std::error::Error for NmtError {}

impl From<reqwest::Error> for NmtError {
    fn from(err: reqwest::Error) -> Self {
        NmtError::NetworkError(err.to_string())
    }
}

/// Result type for neural translation operations
pub type NmtResult<T> = Result<T, NmtError>;
