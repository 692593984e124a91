use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::SeaTableConfig;
use crate::models::{Entry, User};
use crate::services::LateEntryStore;

use super::error::StoreError;
use super::filter::{FilterExpr, FilterQuery};
use super::rows::{AppendRow, EntryRow, NewEntryRow, RowsEnvelope, UserRow};

/// HTTP client for the two SeaTable tables the API works with.
#[derive(Debug, Clone)]
pub struct SeaTableClient {
    http: Client,
    config: SeaTableConfig,
}

impl SeaTableClient {
    pub fn new(config: SeaTableConfig) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        // Reject a malformed base URL at startup rather than on first request.
        table_url(&config, &config.entries_table)?;

        Ok(Self { http, config })
    }

    /// `{base}/dtable-db/{table}/?token={token}`
    pub fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        table_url(&self.config, table)
    }

    /// Query a table with a filter expression.
    pub async fn query<T: DeserializeOwned>(
        &self,
        table: &str,
        expr: &FilterExpr,
        limit: u32,
    ) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table)?;
        let body = FilterQuery::new(expr, limit)?;

        tracing::debug!(table, limit, "SeaTable query");
        let response = self.http.post(url).json(&body).send().await?;
        read_rows(response).await
    }

    /// Read a table without a filter, in the store's default page size.
    pub async fn list<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table)?;

        tracing::debug!(table, "SeaTable list");
        let response = self.http.get(url).send().await?;
        read_rows(response).await
    }

    /// Append a single row to a table.
    pub async fn append<R: serde::Serialize>(&self, table: &str, row: R) -> Result<(), StoreError> {
        let url = self.table_url(table)?;

        tracing::debug!(table, "SeaTable append");
        let response = self.http.post(url).json(&AppendRow { row }).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl LateEntryStore for SeaTableClient {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        let expr = FilterExpr::eq("username", username)?;
        let rows: Vec<UserRow> = self.query(&self.config.users_table, &expr, 1).await?;

        let user = rows
            .into_iter()
            .next()
            .map(User::from)
            .filter(|user| passwords_match(&user.password, password));

        Ok(user)
    }

    async fn fetch_all(&self) -> Result<Vec<Entry>, StoreError> {
        let rows: Vec<EntryRow> = self.list(&self.config.entries_table).await?;
        Ok(rows.into_iter().map(Entry::from).collect())
    }

    async fn create(&self, mut entry: Entry) -> Result<Entry, StoreError> {
        entry.stamp_now();
        self.append(&self.config.entries_table, NewEntryRow::from(&entry))
            .await?;
        Ok(entry)
    }
}

fn table_url(config: &SeaTableConfig, table: &str) -> Result<Url, StoreError> {
    let base = config.base_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{}/dtable-db/", base))?.join(&format!("{}/", table))?;
    url.query_pairs_mut().append_pair("token", &config.api_token);
    Ok(url)
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, StoreError> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    let envelope: RowsEnvelope<T> = serde_json::from_slice(&bytes)?;
    Ok(envelope.rows)
}

/// Compare passwords through their SHA-256 digests so the comparison time
/// does not depend on where the inputs first differ.
fn passwords_match(stored: &str, supplied: &str) -> bool {
    let a = Sha256::digest(stored.as_bytes());
    let b = Sha256::digest(supplied.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
