//! Request and response bodies exchanged with the backend.

mod document;
mod user;

pub use document::NewDocument;
pub use user::{CreatedUser, LoginRequest, LoginResponse, NewUser};

use serde::Deserialize;

/// Error payload returned with non-2xx statuses.
///
/// Validation failures carry a structured `detail` list instead of a string; only
/// string details are shown to the user.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        }
    }
}
