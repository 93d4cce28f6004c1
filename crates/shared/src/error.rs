use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload returned by the chats API on non-success statuses.
///
/// `detail` is usually a string, but framework-level validation failures put a
/// list of objects there, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(serde_json::Value::String(detail.into())),
        }
    }

    /// The human-readable detail, if the server sent one as a string.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_ref().and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid created_at timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}
