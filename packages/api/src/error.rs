//! Errors from talking to the backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx status. `detail` is the backend's `{"detail": "..."}` text, if any.
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },
    /// Well-formed response missing the fields the client needs.
    #[error("unexpected server response")]
    UnexpectedResponse,
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(status: u16, detail: Option<&str>) -> Self {
        ApiError::Status {
            status,
            detail: detail.map(str::to_string),
        }
    }

    /// The backend-provided error detail, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
