use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Longest title the backend accepts.
pub const MAX_TITLE_LEN: usize = 255;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(ChatId);

/// A chat as created by the backend. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResource {
    pub id: ChatId,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
}

impl ChatResource {
    /// A resource only counts as present when the server assigned it an identity.
    pub fn is_present(&self) -> bool {
        !self.id.is_empty()
    }
}
