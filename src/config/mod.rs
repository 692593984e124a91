use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub seatable: SeaTableConfig,
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Connection settings for the SeaTable workspace backing the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeaTableConfig {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_token: String,
    pub users_table: String,
    pub entries_table: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed origins for `/api/**`. Empty, or a `*` entry, means any origin.
    pub cors_origins: Vec<String>,
}

impl SecurityConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

impl SeaTableConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            users_table: "Users".to_string(),
            entries_table: "Entries".to_string(),
            timeout_secs: 30,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// `APP_ENV` selects the defaults, then individual variables override them.
    /// `SEATABLE_BASE_URL` and `SEATABLE_API_TOKEN` have no default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let base_url = required("SEATABLE_BASE_URL")?;
        let api_token = required("SEATABLE_API_TOKEN")?;

        match environment {
            Environment::Production => Self::production(base_url, api_token),
            Environment::Staging => Self::staging(base_url, api_token),
            Environment::Development => Self::development(base_url, api_token),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        // SeaTable overrides
        if let Ok(v) = env::var("SEATABLE_USERS_TABLE") {
            self.seatable.users_table = v;
        }
        if let Ok(v) = env::var("SEATABLE_ENTRIES_TABLE") {
            self.seatable.entries_table = v;
        }
        if let Ok(v) = env::var("SEATABLE_TIMEOUT_SECS") {
            self.seatable.timeout_secs = parse("SEATABLE_TIMEOUT_SECS", &v)?;
        }

        // Server overrides
        if let Ok(v) = env::var("LATECOMER_HOST") {
            self.server.host = v;
        }
        if let Some(port) = port_override(env::var("LATECOMER_PORT").ok(), env::var("PORT").ok())? {
            self.server.port = port;
        }

        // API overrides
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = parse("API_MAX_REQUEST_SIZE_BYTES", &v)?;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = split_origins(&v);
        }

        Ok(self)
    }

    pub fn development(base_url: String, api_token: String) -> Self {
        Self {
            environment: Environment::Development,
            seatable: SeaTableConfig::new(base_url, api_token),
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            api: ApiConfig {
                max_request_size_bytes: 1024 * 1024, // 1MB
            },
            security: SecurityConfig {
                cors_origins: Vec::new(),
            },
        }
    }

    pub fn staging(base_url: String, api_token: String) -> Self {
        let mut config = Self::development(base_url, api_token);
        config.environment = Environment::Staging;
        config.seatable.timeout_secs = 10;
        config.api.max_request_size_bytes = 256 * 1024;
        config
    }

    pub fn production(base_url: String, api_token: String) -> Self {
        let mut config = Self::staging(base_url, api_token);
        config.environment = Environment::Production;
        config
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `LATECOMER_PORT` wins over the platform-provided `PORT`. Errors name the
/// variable the value came from.
fn port_override(latecomer: Option<String>, platform: Option<String>) -> Result<Option<u16>, ConfigError> {
    match (latecomer, platform) {
        (Some(v), _) => parse("LATECOMER_PORT", &v).map(Some),
        (None, Some(v)) => parse("PORT", &v).map(Some),
        (None, None) => Ok(None),
    }
}
