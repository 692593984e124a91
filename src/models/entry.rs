use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of [`Entry::time`], e.g. `2024-03-01 08:47:12`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One late-arrival record as exposed by `GET /api/entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    pub roll_no: String,
    pub dept: String,
    pub year: String,
    pub class_name: String,
    pub transport: String,
    pub reason: String,
    pub time: String,
    pub recorded_by: String,
    /// Assigned by SeaTable; `None` until the row has been read back.
    pub id: Option<String>,
}

impl Entry {
    /// Overwrite `time` with the current server-local instant.
    pub fn stamp_now(&mut self) {
        self.stamp(Local::now().naive_local());
    }

    pub fn stamp(&mut self, at: NaiveDateTime) {
        self.time = at.format(TIME_FORMAT).to_string();
    }
}
