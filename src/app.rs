use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers::{auth, entries, system};
use crate::middleware::cors_layer;
use crate::services::LateEntryStore;

/// Shared handler state. The store is the only dependency.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LateEntryStore>,
}

impl AppState {
    pub fn new(store: impl LateEntryStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        // API
        .nest("/api", api_routes(config))
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .route("/auth", post(auth::authenticate))
        .route("/entries", get(entries::list).post(entries::create))
        .layer(cors_layer(&config.security))
}
