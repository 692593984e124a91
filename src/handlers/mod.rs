// handlers/mod.rs - HTTP handlers
//
// Public:  GET /, GET /health
// API:     POST /api/auth, GET /api/entries, POST /api/entries

pub mod auth;
pub mod entries;
pub mod system;

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` body used for plain acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `None` for absent or empty strings.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
