//! Authentication configuration types

use crate::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX, JWT_DEFAULT_EXPIRATION_SECS};
use libra_domain::constants::DEFAULT_ROLE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JWT configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC signing secret
    ///
    /// **REQUIRED**. Configure via `LIBRA__AUTH__JWT__SECRET` or
    /// `auth.jwt.secret` in the config file. Must be at least 32 bytes.
    pub secret: String,

    /// Token lifetime in seconds
    pub expiration_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            // Empty by default; the loader rejects it
            secret: String::new(),
            expiration_secs: JWT_DEFAULT_EXPIRATION_SECS,
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_secs", &self.expiration_secs)
            .finish()
    }
}

/// Account status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// May log in
    #[default]
    Active,
    /// Disabled by an operator
    Inactive,
    /// Locked out
    Locked,
}

/// A user account known to the in-memory credential store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// User id embedded in issued tokens
    pub id: i64,

    /// Login name
    pub username: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Role names; the first one is used for issued tokens
    #[serde(default)]
    pub roles: Vec<String>,

    /// Account status
    #[serde(default)]
    pub status: UserStatus,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Header carrying the bearer token
    pub header: String,

    /// Prefix stripped from the header value
    pub token_prefix: String,

    /// Role used when a user has none
    pub default_role: String,

    /// Accounts accepted by the login endpoint
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            header: AUTHORIZATION_HEADER.to_string(),
            token_prefix: BEARER_PREFIX.to_string(),
            default_role: DEFAULT_ROLE.to_string(),
            users: Vec::new(),
        }
    }
}
