//! Error types for planner API calls

use thiserror::Error;

/// Errors that can occur when calling the planner API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with a non-2xx status
    #[error("planner API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body as text, possibly empty
        body: String,
    },

    /// The request never got a response (connection refused, DNS, TLS, ...)
    #[error("request to planner API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL cannot carry path segments
    #[error("invalid planner API base URL '{0}'")]
    BaseUrl(String),

    /// A 2xx response whose body was not valid JSON
    #[error("planner API returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the API produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::BaseUrl(_) | ApiError::Decode(_) => None,
        }
    }
}

/// Result type alias for planner API operations
pub type ApiResult<T> = Result<T, ApiError>;
