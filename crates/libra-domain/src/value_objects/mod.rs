//! Domain Value Objects
//!
//! Immutable value objects exchanged between the layers.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Principal`] | Authenticated caller attached to one request |
//! | [`TokenClaims`] | Claim set carried by a signed session token |
//! | [`CatalogDocument`] | Declarative permission and role table |
//! | [`LoginRequest`] / [`LoginResponse`] | Hybrid login wire contract |
//! | [`VerifiedUser`] | Outcome of an external credential check |

/// Permission catalog declarations
pub mod catalog;
/// Login wire contract
pub mod login;
/// Principals and token claims
pub mod principal;

pub use catalog::{CatalogDocument, PermissionDefinition, RoleDefinition};
pub use login::{LoginRequest, LoginResponse, VerifiedUser};
pub use principal::{Principal, TokenClaims};
