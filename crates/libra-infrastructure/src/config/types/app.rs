//! Main application configuration

use super::{AuthConfig, CatalogConfig, EncryptionConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Token and credential configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Key material configuration
    #[serde(default)]
    pub encryption: EncryptionConfig,

    /// Permission catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}
