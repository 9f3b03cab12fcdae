//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the infrastructure layer and consumed by
//! the server layer. Keeping them here lets handlers be exercised with test
//! doubles.
//!
//! ## Organization
//!
//! - **auth** - token issuance/verification, credential checks, time source
//! - **crypto** - hybrid login payload unwrapping

/// Authentication ports
pub mod auth;
/// Cryptographic ports
pub mod crypto;

pub use auth::{Clock, CredentialVerifier, TokenProvider};
pub use crypto::CredentialUnwrapper;
