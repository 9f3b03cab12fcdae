//! Login wire contract

use crate::constants::TOKEN_TYPE_BEARER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hybrid-encrypted login payload
///
/// `encrypted_password` is `Base64(AES-GCM(password, clientKey))` and
/// `encrypted_aes_key` is `Base64(RSA(Base64(clientKey), serverPublicKey))`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account name
    pub username: String,
    /// Password sealed with the client's one-off symmetric key
    pub encrypted_password: String,
    /// Client symmetric key wrapped with the server public key
    pub encrypted_aes_key: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("encrypted_password", &"<redacted>")
            .field("encrypted_aes_key", &"<redacted>")
            .finish()
    }
}

/// Successful login result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed session token
    pub token: String,
    /// Token type, always `Bearer`
    #[serde(rename = "type")]
    pub token_type: String,
    /// Authenticated user id
    pub user_id: i64,
    /// Role embedded in the token
    pub role: String,
}

impl LoginResponse {
    /// Create a bearer login response
    pub fn bearer(token: String, user_id: i64, role: impl Into<String>) -> Self {
        Self {
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            user_id,
            role: role.into(),
        }
    }
}

/// Identity returned by a successful credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    /// User id
    pub user_id: i64,
    /// Role to embed in the issued token
    pub role: String,
}
