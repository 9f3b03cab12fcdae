//! # Infrastructure Layer
//!
//! Technical implementations of the domain ports plus the cross-cutting
//! concerns every Libra binary needs.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | AES-256-GCM, RSA key wrapping, key store, hybrid login unwrapping |
//! | [`auth`] | JWT tokens, permission catalog, URL matching, authorization gate |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-backed TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod auth;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
