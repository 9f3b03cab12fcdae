//! HTTP server configuration types

use crate::constants::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};
use serde::{Deserialize, Serialize};

/// CORS configuration
///
/// Origins are an explicit list. An empty list disables the CORS fairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCorsConfig {
    /// Origins allowed to call the API; `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Methods advertised in preflight responses
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,

    /// Headers advertised in preflight responses
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    ["Authorization", "Content-Type"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ServerCorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
        }
    }
}

impl ServerCorsConfig {
    /// Whether any origin is configured
    pub fn is_enabled(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// Whether the wildcard origin is configured
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// CORS configuration
    #[serde(default)]
    pub cors: ServerCorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors: ServerCorsConfig::default(),
        }
    }
}
