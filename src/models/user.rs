use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "STAFF";

/// A row of the Users table, held only for the duration of one login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}

impl User {
    /// Build a user, falling back to [`DEFAULT_ROLE`] when `role` is missing or blank.
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Option<String>) -> Self {
        let role = role
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}
