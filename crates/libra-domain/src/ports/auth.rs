//! Authentication Ports
//!
//! Contracts for stateless session tokens and the external credential check.

use crate::error::{Result, TokenError};
use crate::value_objects::{TokenClaims, VerifiedUser};
use async_trait::async_trait;
use std::time::Duration;

/// Issues and verifies signed session tokens
///
/// Implementations must be pure functions of (claims, secret) and
/// (token, secret) so that they can be shared across requests without locking.
pub trait TokenProvider: Send + Sync {
    /// Issue a token for `principal_id` under `role`, valid for `ttl`
    fn issue(
        &self,
        principal_id: i64,
        role: &str,
        ttl: Duration,
    ) -> std::result::Result<String, TokenError>;

    /// Issue a token with the provider's configured lifetime
    fn issue_default(
        &self,
        principal_id: i64,
        role: &str,
    ) -> std::result::Result<String, TokenError>;

    /// Verify a token and return its trusted claims
    fn verify(&self, token: &str) -> std::result::Result<TokenClaims, TokenError>;
}

/// Checks a username and plaintext password against an external user store
///
/// Every failure reason (unknown user, wrong password, disabled account)
/// must surface as the same error so callers cannot enumerate accounts.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify the credentials and return the user's identity
    async fn verify_credentials(&self, username: &str, password: &str) -> Result<VerifiedUser>;
}

/// Source of the current time, in whole seconds since the Unix epoch
pub trait Clock: Send + Sync {
    /// Current time in seconds
    fn now(&self) -> i64;
}
