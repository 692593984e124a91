// Wire shapes of the SeaTable row API and their mapping onto the domain models.

use serde::{Deserialize, Serialize};

use crate::models::{Entry, User};
use crate::types::{cell_text, optional_cell_text};

/// The `{ "rows": [...] }` envelope returned by table reads and queries.
#[derive(Debug, Deserialize)]
pub struct RowsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct UserRow {
    #[serde(default, deserialize_with = "cell_text")]
    pub username: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub password: String,
    #[serde(default, deserialize_with = "optional_cell_text")]
    pub role: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.username, row.password, row.role)
    }
}

#[derive(Debug, Deserialize)]
pub struct EntryRow {
    #[serde(rename = "_id", default, deserialize_with = "optional_cell_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub name: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub roll_no: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub dept: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub year: String,
    #[serde(rename = "class", default, deserialize_with = "cell_text")]
    pub class_name: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub transport: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub reason: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub time: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub recorded_by: String,
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Entry {
            name: row.name,
            roll_no: row.roll_no,
            dept: row.dept,
            year: row.year,
            class_name: row.class_name,
            transport: row.transport,
            reason: row.reason,
            time: row.time,
            recorded_by: row.recorded_by,
            id: row.id,
        }
    }
}

/// Writable columns of an Entries row. `_id` is assigned by SeaTable.
#[derive(Debug, Serialize)]
pub struct NewEntryRow<'a> {
    pub name: &'a str,
    pub roll_no: &'a str,
    pub dept: &'a str,
    pub year: &'a str,
    #[serde(rename = "class")]
    pub class_name: &'a str,
    pub transport: &'a str,
    pub reason: &'a str,
    pub time: &'a str,
    pub recorded_by: &'a str,
}

impl<'a> From<&'a Entry> for NewEntryRow<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            name: &entry.name,
            roll_no: &entry.roll_no,
            dept: &entry.dept,
            year: &entry.year,
            class_name: &entry.class_name,
            transport: &entry.transport,
            reason: &entry.reason,
            time: &entry.time,
            recorded_by: &entry.recorded_by,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppendRow<R: Serialize> {
    pub row: R,
}
