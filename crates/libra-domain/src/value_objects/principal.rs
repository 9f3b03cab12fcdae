//! Principal and token claim value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated caller, valid for the lifetime of one request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    /// Identifier of the authenticated user
    pub principal_id: i64,
    /// Role name the request was authorized under
    pub role: String,
}

impl Principal {
    /// Create a new principal
    pub fn new(principal_id: i64, role: impl Into<String>) -> Self {
        Self {
            principal_id,
            role: role.into(),
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.role, self.principal_id)
    }
}

/// Claim set embedded in a signed session token
///
/// Carries identity only. Permissions are resolved per request so that
/// catalog changes apply without reissuing tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, the decimal form of `uid`
    pub sub: String,
    /// Principal identifier
    pub uid: i64,
    /// Role name
    pub role: String,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl TokenClaims {
    /// Build the claim set for a principal issued at `now`
    pub fn new(principal_id: i64, role: impl Into<String>, now: i64, ttl_secs: i64) -> Self {
        Self {
            sub: principal_id.to_string(),
            uid: principal_id,
            role: role.into(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        }
    }

    /// Whether the claims are expired at `now`
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Whether `sub` and `uid` agree
    pub fn is_consistent(&self) -> bool {
        self.sub == self.uid.to_string()
    }

    /// The principal these claims describe
    pub fn principal(&self) -> Principal {
        Principal::new(self.uid, self.role.clone())
    }
}
