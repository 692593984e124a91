// handlers/entries.rs - GET/POST /api/entries handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::Entry;
use crate::types::optional_cell_text;

use super::{non_empty, MessageResponse};

pub const NAME_REQUIRED: &str = "Name is required";
pub const ROLL_NO_REQUIRED: &str = "Roll number is required";
pub const ENTRY_RECORDED: &str = "Entry recorded successfully";
pub const ENTRY_SAVE_FAILED: &str = "Failed to save entry to SeaTable";

/// Body of `POST /api/entries`, using the SeaTable column names.
#[derive(Debug, Default, Deserialize)]
pub struct NewEntryRequest {
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub roll_no: Option<String>,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub dept: Option<String>,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub year: Option<String>,
    #[serde(rename = "class", default, deserialize_with = "optional_cell_text")]
    pub class_name: Option<String>,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub transport: Option<String>,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub recorded_by: Option<String>,
}

impl NewEntryRequest {
    /// Check the required fields. `name` is reported before `roll_no`.
    pub fn into_entry(self) -> Result<Entry, ApiError> {
        let name = non_empty(self.name).ok_or_else(|| ApiError::validation_error(NAME_REQUIRED))?;
        let roll_no =
            non_empty(self.roll_no).ok_or_else(|| ApiError::validation_error(ROLL_NO_REQUIRED))?;

        Ok(Entry {
            name,
            roll_no,
            dept: self.dept.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            class_name: self.class_name.unwrap_or_default(),
            transport: self.transport.unwrap_or_default(),
            reason: self.reason.unwrap_or_default(),
            recorded_by: self.recorded_by.unwrap_or_default(),
            time: String::new(),
            id: None,
        })
    }
}

/// GET /api/entries - List every late entry in SeaTable order.
///
/// Never fails: if SeaTable cannot be read the response is an empty array.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Entry>> {
    match state.store.fetch_all().await {
        Ok(entries) => {
            tracing::debug!(count = entries.len(), "fetched entries");
            Json(entries)
        }
        Err(e) => {
            // TODO: surface this as 502 once the frontend can tell "no entries" from "unavailable"
            tracing::warn!(error = %e, "could not fetch entries, returning empty list");
            Json(Vec::new())
        }
    }
}

/// POST /api/entries - Record a late arrival.
///
/// The `time` column is always set by the server; any `time` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewEntryRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(request) = payload?;
    let entry = request.into_entry()?;

    match state.store.create(entry).await {
        Ok(entry) => {
            tracing::info!(roll_no = %entry.roll_no, time = %entry.time, "entry recorded");
            Ok(Json(MessageResponse::new(ENTRY_RECORDED)))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to write entry to SeaTable");
            Err(ApiError::internal_server_error(ENTRY_SAVE_FAILED))
        }
    }
}
