#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use latecomer_api::app::{app, AppState};
use latecomer_api::config::AppConfig;
use latecomer_api::seatable::SeaTableClient;

pub const TOKEN: &str = "test-api-token";

/// A request the fake SeaTable received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub table: String,
    pub body: Value,
}

/// How the fake answers row reads (list and filter queries) when told to fail.
#[derive(Debug, Clone, Copy)]
pub enum ReadFailure {
    Status(StatusCode),
    MalformedBody,
}

impl ReadFailure {
    fn respond(self) -> Response {
        match self {
            ReadFailure::Status(status) => {
                (status, Json(json!({ "error_msg": "read failed" }))).into_response()
            }
            ReadFailure::MalformedBody => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        }
    }
}

#[derive(Default)]
struct Tables {
    users: Vec<Value>,
    entries: Vec<Value>,
    requests: Vec<Recorded>,
    reject_writes: bool,
    failing_reads: Option<ReadFailure>,
}

/// In-process stand-in for the SeaTable `dtable-db` row API.
#[derive(Clone, Default)]
pub struct FakeSeaTable {
    tables: Arc<Mutex<Tables>>,
}

impl FakeSeaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, row: Value) -> Self {
        self.tables.lock().unwrap().users.push(row);
        self
    }

    pub fn with_entry(self, row: Value) -> Self {
        self.tables.lock().unwrap().entries.push(row);
        self
    }

    pub fn rejecting_writes(self) -> Self {
        self.tables.lock().unwrap().reject_writes = true;
        self
    }

    pub fn failing_reads(self, failure: ReadFailure) -> Self {
        self.tables.lock().unwrap().failing_reads = Some(failure);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.tables.lock().unwrap().requests.clone()
    }

    pub fn entry_rows(&self) -> Vec<Value> {
        self.tables.lock().unwrap().entries.clone()
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/dtable-db/:table/", get(read_table).post(write_table))
            .with_state(self.clone())
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

async fn read_table(
    State(fake): State<FakeSeaTable>,
    Path(table): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Response {
    if query.token.as_deref() != Some(TOKEN) {
        return invalid_token();
    }

    let mut tables = fake.tables.lock().unwrap();
    tables.requests.push(Recorded {
        method: "GET",
        table: table.clone(),
        body: Value::Null,
    });
    if let Some(failure) = tables.failing_reads {
        return failure.respond();
    }

    let rows = match table.as_str() {
        "Users" => tables.users.clone(),
        "Entries" => tables.entries.clone(),
        _ => return (StatusCode::NOT_FOUND, Json(json!({ "error_msg": "table not found" }))).into_response(),
    };
    (StatusCode::OK, Json(json!({ "rows": rows }))).into_response()
}

fn invalid_token() -> Response {
    (StatusCode::FORBIDDEN, Json(json!({ "error_msg": "invalid token" }))).into_response()
}

async fn write_table(
    State(fake): State<FakeSeaTable>,
    Path(table): Path<String>,
    Query(query): Query<TokenQuery>,
    Json(body): Json<Value>,
) -> Response {
    if query.token.as_deref() != Some(TOKEN) {
        return invalid_token();
    }

    let mut tables = fake.tables.lock().unwrap();
    tables.requests.push(Recorded {
        method: "POST",
        table: table.clone(),
        body: body.clone(),
    });

    if let Some(row) = body.get("row") {
        if tables.reject_writes {
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error_msg": "write failed" }))).into_response();
        }
        let mut row = row.clone();
        let id = format!("row{}", tables.entries.len() + 1);
        row["_id"] = json!(id);
        tables.entries.push(row);
        return (StatusCode::OK, Json(json!({ "_id": id }))).into_response();
    }

    if let Some(failure) = tables.failing_reads {
        return failure.respond();
    }

    let Some(filter) = body.get("filter").and_then(Value::as_str) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error_msg": "filter or row required" }))).into_response();
    };
    let Some(username) = parse_username_filter(filter) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error_msg": "unsupported filter" }))).into_response();
    };
    let limit = body.get("limit").and_then(Value::as_u64).unwrap_or(100) as usize;

    let rows: Vec<Value> = tables
        .users
        .iter()
        .filter(|row| row["username"] == json!(username))
        .take(limit)
        .cloned()
        .collect();
    (StatusCode::OK, Json(json!({ "rows": rows }))).into_response()
}

/// Parse `username = "<escaped>"` back into the raw username.
fn parse_username_filter(filter: &str) -> Option<String> {
    let quoted = filter.strip_prefix("username = \"")?.strip_suffix('"')?;

    let mut out = String::new();
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                other => out.push(other),
            },
            // An unescaped quote would end the literal early.
            '"' => return None,
            _ => out.push(c),
        }
    }
    Some(out)
}

async fn serve(router: Router) -> Result<(String, tokio::task::JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok((format!("http://{}", addr), handle))
}

pub struct TestServer {
    pub base_url: String,
    pub seatable: FakeSeaTable,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Start the fake SeaTable and the API pointed at it.
    pub async fn spawn(seatable: FakeSeaTable) -> Result<Self> {
        Self::spawn_with_token(seatable, TOKEN).await
    }

    /// Start the fake SeaTable and the API, configured with `api_token`.
    pub async fn spawn_with_token(seatable: FakeSeaTable, api_token: &str) -> Result<Self> {
        let (seatable_url, seatable_handle) = serve(seatable.router()).await?;
        let (base_url, api_handle) = spawn_api(&seatable_url, api_token).await?;

        Ok(Self {
            base_url,
            seatable,
            handles: vec![seatable_handle, api_handle],
        })
    }

    /// Start the API against a SeaTable URL nothing listens on.
    pub async fn spawn_unreachable() -> Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let dead_url = format!("http://{}", listener.local_addr()?);
        drop(listener);

        let (base_url, api_handle) = spawn_api(&dead_url, TOKEN).await?;
        Ok(Self {
            base_url,
            seatable: FakeSeaTable::new(),
            handles: vec![api_handle],
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

async fn spawn_api(seatable_url: &str, api_token: &str) -> Result<(String, tokio::task::JoinHandle<()>)> {
    let mut config = AppConfig::development(seatable_url.to_string(), api_token.to_string());
    config.seatable.timeout_secs = 5;

    let store = SeaTableClient::new(config.seatable.clone())?;
    serve(app(AppState::new(store), &config)).await
}
