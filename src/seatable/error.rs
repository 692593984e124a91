use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(u32),
}

/// Anything that went wrong talking to SeaTable.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid SeaTable URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid filter: {0}")]
    Filter(#[from] FilterError),

    #[error("SeaTable request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("SeaTable returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed SeaTable response: {0}")]
    Decode(#[from] serde_json::Error),
}
