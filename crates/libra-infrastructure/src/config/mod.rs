//! Configuration management
//!
//! Typed configuration sections plus the Figment loader that merges
//! defaults, a TOML file and `LIBRA__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AesConfig, AppConfig, AuthConfig, CatalogConfig, EncryptionConfig, JwtConfig, LoggingConfig,
    RsaConfig, RsaKeyMode, ServerConfig, ServerCorsConfig, UserConfig, UserStatus,
};
