use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::app::{app, AppState};
use crate::config::AppConfig;
use crate::models::{Entry, User};
use crate::seatable::StoreError;
use crate::services::LateEntryStore;

/// In-memory store for handler tests. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<User>>>,
    entries: Arc<Mutex<Vec<Entry>>>,
    calls: Arc<AtomicUsize>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, username: &str, password: &str, role: &str) -> Self {
        self.users
            .lock()
            .unwrap()
            .push(User::new(username, password, Some(role.to_string())));
        self
    }

    /// Every store call fails as if SeaTable were down.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(StoreError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LateEntryStore for MemoryStore {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        self.begin()?;
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<Entry>, StoreError> {
        self.begin()?;
        Ok(self.entries())
    }

    async fn create(&self, mut entry: Entry) -> Result<Entry, StoreError> {
        self.begin()?;
        entry.stamp_now();
        let mut entries = self.entries.lock().unwrap();
        entry.id = Some(format!("row{}", entries.len() + 1));
        entries.push(entry.clone());
        Ok(entry)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::development("http://seatable.invalid".to_string(), "test-token".to_string())
}

/// Send one request through the full router and decode the JSON reply.
pub async fn call(
    store: &MemoryStore,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let router = app(AppState::new(store.clone()), &test_config());

    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_counts_calls() {
        let store = MemoryStore::new().with_user("a", "b", "STAFF");
        assert!(store.authenticate("a", "b").await.unwrap().is_some());
        assert!(store.authenticate("a", "x").await.unwrap().is_none());
        assert_eq!(store.calls(), 2);
    }
}
