//! Configuration types module

pub mod app;
pub mod auth;
pub mod catalog;
pub mod encryption;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig, UserConfig, UserStatus};
pub use catalog::CatalogConfig;
pub use encryption::{AesConfig, EncryptionConfig, RsaConfig, RsaKeyMode};
pub use logging::LoggingConfig;
pub use server::{ServerConfig, ServerCorsConfig};
