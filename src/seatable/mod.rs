//! SeaTable proxy layer.
//!
//! Owns the wire contract of the tabular store: table URLs, filter
//! expressions, the `{rows: [...]}` envelope and the column names of the
//! Users and Entries tables.

pub mod client;
pub mod error;
pub mod filter;
pub mod rows;

pub use client::SeaTableClient;
pub use error::{FilterError, StoreError};
pub use filter::{FilterExpr, FilterQuery};
