// handlers/auth.rs - POST /api/auth handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::optional_cell_text;

use super::non_empty;

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub username: String,
    pub role: String,
    /// Random identifier for the client session. Nothing on the server
    /// stores or checks it.
    pub token: String,
}

/// POST /api/auth - Check a username/password pair against the Users table.
///
/// ```json
/// { "username": "admin", "password": "secret" }
/// ```
///
/// Returns `{username, role, token}` on success, 400 when either field is
/// missing or empty, and 401 otherwise. A SeaTable outage is reported as
/// 401 as well.
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<AuthResponse> {
    let Json(credentials) = payload?;

    let (Some(username), Some(password)) = (
        non_empty(credentials.username),
        non_empty(credentials.password),
    ) else {
        return Err(ApiError::validation_error(CREDENTIALS_REQUIRED));
    };

    match state.store.authenticate(&username, &password).await {
        Ok(Some(user)) => {
            tracing::info!(username = %user.username, role = %user.role, "login succeeded");
            Ok(Json(AuthResponse {
                username: user.username,
                role: user.role,
                token: Uuid::new_v4().to_string(),
            }))
        }
        Ok(None) => {
            tracing::info!(%username, "login rejected");
            Err(ApiError::unauthorized(INVALID_CREDENTIALS))
        }
        Err(e) => {
            tracing::error!(%username, error = %e, "authentication failed against SeaTable");
            Err(ApiError::unauthorized(INVALID_CREDENTIALS))
        }
    }
}
