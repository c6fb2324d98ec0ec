use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response status: {0}")]
    Response(reqwest::StatusCode),

    #[error("Failed to decode lookup response: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("Lookup returned no results")]
    NoResults,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl LookupError {
    /// Whether the request was never issued because its URL could not be built
    pub fn is_precondition(&self) -> bool {
        matches!(self, LookupError::InvalidUrl(_))
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Local version not found in bundle metadata")]
    MissingLocalVersion,

    #[error("No Tokio runtime available to run the check")]
    NoRuntime,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
