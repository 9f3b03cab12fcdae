//! In-memory credential store

use crate::config::{AuthConfig, UserConfig, UserStatus};
use async_trait::async_trait;
use libra_domain::ports::CredentialVerifier;
use libra_domain::{Error, Result, VerifiedUser};
use std::collections::HashMap;
use tracing::debug;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// [`CredentialVerifier`] over the users listed in configuration
///
/// Passwords are stored as bcrypt hashes and checked off the async runtime.
#[derive(Debug, Clone)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, UserConfig>,
    default_role: String,
}

impl InMemoryCredentialStore {
    /// Create a store over `users`
    pub fn new(
        users: impl IntoIterator<Item = UserConfig>,
        default_role: impl Into<String>,
    ) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
            default_role: default_role.into(),
        }
    }

    /// Create a store from the `auth` configuration section
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.users.iter().cloned(), config.default_role.clone())
    }

    /// Number of known accounts
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no accounts are configured
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialVerifier for InMemoryCredentialStore {
    async fn verify_credentials(&self, username: &str, password: &str) -> Result<VerifiedUser> {
        let Some(user) = self.users.get(username) else {
            debug!("Login for unknown user");
            return Err(Error::authentication(INVALID_CREDENTIALS));
        };
        if user.status != UserStatus::Active {
            debug!(user_id = user.id, status = ?user.status, "Login for disabled user");
            return Err(Error::authentication(INVALID_CREDENTIALS));
        }

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| Error::internal(format!("Password check task failed: {e}")))?;

        match verified {
            Ok(true) => {}
            Ok(false) => {
                debug!(user_id = user.id, "Wrong password");
                return Err(Error::authentication(INVALID_CREDENTIALS));
            }
            Err(e) => {
                debug!(user_id = user.id, error = %e, "Stored password hash unusable");
                return Err(Error::authentication(INVALID_CREDENTIALS));
            }
        }

        let role = user
            .roles
            .first()
            .cloned()
            .unwrap_or_else(|| self.default_role.clone());
        Ok(VerifiedUser {
            user_id: user.id,
            role,
        })
    }
}
