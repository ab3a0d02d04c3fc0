use thiserror::Error;

/// Unified error type for the cloak client
#[derive(Error, Debug)]
pub enum CloakError {
    // Persisted blob errors
    #[error("Invalid blob encoding: {0}")]
    InvalidEncoding(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    // Proxy credential codec errors
    #[error("Invalid proxy URL: {0}")]
    InvalidProxyUrl(String),

    #[error("Invalid user info format")]
    InvalidUserInfoFormat,

    #[error("Invalid upstream username format")]
    InvalidUsernameFormat,

    #[error("Invalid session duration: {0}")]
    InvalidSessionDuration(String),

    #[error("Invalid proxy port")]
    InvalidPort,

    // Identity errors
    #[error("Random source unavailable")]
    RandomSourceUnavailable,

    // Request errors
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for cloak operations
pub type Result<T> = std::result::Result<T, CloakError>;

impl CloakError {
    /// Check if this error came from decoding a persisted proxy string
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            CloakError::InvalidProxyUrl(_)
                | CloakError::InvalidUserInfoFormat
                | CloakError::InvalidUsernameFormat
                | CloakError::InvalidSessionDuration(_)
                | CloakError::InvalidPort
        )
    }
}

// Convert from URL parse errors
impl From<url::ParseError> for CloakError {
    fn from(err: url::ParseError) -> Self {
        CloakError::InvalidProxyUrl(err.to_string())
    }
}

// Convert from header construction errors
impl From<reqwest::header::InvalidHeaderName> for CloakError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        CloakError::InvalidHeader(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for CloakError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        CloakError::InvalidHeader(err.to_string())
    }
}
