//! # Libra Domain
//!
//! Core types and contracts for the Libra authentication and authorization
//! subsystem. This crate has no knowledge of HTTP frameworks, cryptographic
//! libraries or configuration sources.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and per-component error enumerations |
//! | [`value_objects`] | Principals, token claims, catalog definitions, login payloads |
//! | [`ports`] | Boundary traits implemented by the infrastructure layer |
//! | [`constants`] | Domain-level constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use error::{AuthRejection, CredentialError, CryptoError, Error, Result, TokenError};
pub use value_objects::{
    CatalogDocument, LoginRequest, LoginResponse, PermissionDefinition, Principal,
    RoleDefinition, TokenClaims, VerifiedUser,
};
