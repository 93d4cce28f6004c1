use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ChatId, ChatResource},
    error::ProtocolError,
};

pub const CHATS_PATH: &str = "/api/chats";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChatRequest {
    pub title: String,
}

/// Wire shape of a created chat, field names as the backend sends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub oid: String,
    pub title: String,
    pub created_at: String,
}

impl TryFrom<ChatResponse> for ChatResource {
    type Error = ProtocolError;

    fn try_from(value: ChatResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            created_at: parse_created_at(&value.created_at)?,
            id: ChatId(value.oid),
            title: value.title,
        })
    }
}

/// Parses an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_created_at(raw: &str) -> Result<DateTime<FixedOffset>, ProtocolError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts);
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|source| ProtocolError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
