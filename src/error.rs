use std::fmt;

/// Central error types for the atlas app
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Network error (reqwest, DNS, timeouts)
    Network(String),
    /// Response body could not be read or parsed as JSON
    Json(String),
    /// Response parsed but did not have the expected shape
    MalformedResponse(String),
    /// Validation error (e.g. empty ISO code)
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Json(msg) => write!(f, "JSON error: {}", msg),
            AppError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Json(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}
