use axum::http::HeaderValue;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_REPORTS_PATH: &str = "data/error_reports.json";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Server settings, read from `SMARTLANG_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    /// Dictionary directory; the embedded lexicon is used when unset
    pub data_dir: Option<PathBuf>,
    pub reports_path: PathBuf,
    /// Allowed CORS origin, or `*` for any
    pub cors_origin: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        ServerConfig {
            bind: lookup("SMARTLANG_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            data_dir: lookup("SMARTLANG_DATA_DIR").map(PathBuf::from),
            reports_path: lookup("SMARTLANG_REPORTS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_PATH)),
            cors_origin: lookup("SMARTLANG_CORS_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_origin == "*" {
            return CorsLayer::permissive();
        }
        match HeaderValue::from_str(&self.cors_origin) {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", self.cors_origin, e);
                CorsLayer::new()
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
