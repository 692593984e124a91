// handlers/system.rs - GET / and GET /health

use axum::response::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Late Comer API",
        "version": version,
        "description": "Middleware between the late entry frontend and SeaTable",
        "endpoints": {
            "auth": "POST /api/auth",
            "entries": "GET /api/entries, POST /api/entries",
            "health": "GET /health",
        }
    }))
}

/// Liveness only; SeaTable is not contacted.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
