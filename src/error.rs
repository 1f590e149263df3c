use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Invalid repository identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Environment error: {0}")]
    EnvError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Aggregate failure of a whole run; the only error shown to readers.
    #[error("projects failed to load")]
    LoadFailed,
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
