use thiserror::Error;

/// Marvel client error types
#[derive(Error, Debug)]
pub enum MarvelError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Marvel operations
pub type MarvelResult<T> = Result<T, MarvelError>;

impl MarvelError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for failures raised before any network activity
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Url(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when the transport gave up because the request timeout elapsed
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_timeout(),
            _ => false,
        }
    }
}
