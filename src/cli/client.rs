use anyhow::{bail, Context};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::handlers::auth::AuthResponse;
use crate::handlers::MessageResponse;
use crate::models::Entry;

/// Thin HTTP client for the Late Comer API.
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .with_context(|| format!("invalid server URL: {}", base_url))?;

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn url(&self, path: &str) -> anyhow::Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub async fn health(&self) -> anyhow::Result<Value> {
        let response = self.http.get(self.url("health")?).send().await?;
        decode(response).await
    }

    pub async fn login(&self, username: &str, password: &str) -> anyhow::Result<AuthResponse> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = self.http.post(self.url("api/auth")?).json(&body).send().await?;
        decode(response).await
    }

    pub async fn list_entries(&self) -> anyhow::Result<Vec<Entry>> {
        let response = self.http.get(self.url("api/entries")?).send().await?;
        decode(response).await
    }

    pub async fn add_entry<B: Serialize>(&self, body: &B) -> anyhow::Result<MessageResponse> {
        let response = self.http.post(self.url("api/entries")?).json(body).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or turn the API's `{message}` into an error.
async fn decode<T: DeserializeOwned>(response: Response) -> anyhow::Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageResponse>(&text)
        .map(|m| m.message)
        .unwrap_or(text);
    bail!("{} ({})", message, status.as_u16())
}
