//! Shared server state
//!
//! Everything a request needs is built once at startup and shared by `Arc`;
//! nothing in here is mutated per request. The permission catalog is the one
//! value published after construction, through [`CatalogHandle`].

use libra_domain::Result;
use libra_domain::ports::{CredentialUnwrapper, CredentialVerifier, TokenProvider};
use libra_infrastructure::auth::{
    AuthorizationGate, CatalogHandle, InMemoryCredentialStore, JwtTokenService,
    RequestAuthenticator,
};
use libra_infrastructure::config::AppConfig;
use libra_infrastructure::crypto::{HybridCredentialUnwrapper, KeyStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Services shared by every route, managed by Rocket
#[derive(Clone)]
pub struct AppState {
    /// Recovers the password from the hybrid login payload
    pub unwrapper: Arc<dyn CredentialUnwrapper>,
    /// Checks username and password against the user store
    pub credentials: Arc<dyn CredentialVerifier>,
    /// Issues and verifies bearer tokens
    pub tokens: Arc<dyn TokenProvider>,
    /// Server key material
    pub key_store: Arc<KeyStore>,
    /// Per-request token verification and authorization
    pub authenticator: RequestAuthenticator,
    /// Publication point of the permission catalog
    pub catalog: Arc<CatalogHandle>,
}

impl AppState {
    /// Assemble the state from already built services
    ///
    /// The authenticator is derived from `tokens` and `catalog` with the
    /// given header settings.
    pub fn new(
        key_store: Arc<KeyStore>,
        credentials: Arc<dyn CredentialVerifier>,
        tokens: Arc<dyn TokenProvider>,
        catalog: Arc<CatalogHandle>,
        header: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        let gate = AuthorizationGate::new(Arc::clone(&catalog));
        let authenticator = RequestAuthenticator::new(Arc::clone(&tokens), gate, header, prefix);
        Self {
            unwrapper: Arc::new(HybridCredentialUnwrapper::new(Arc::clone(&key_store))),
            credentials,
            tokens,
            key_store,
            authenticator,
            catalog,
        }
    }

    /// Build every service from configuration
    ///
    /// The catalog handle starts unpublished; see [`crate::init`].
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let key_store = Arc::new(KeyStore::from_config(&config.encryption)?);
        if key_store.is_ephemeral() {
            warn!("Serving with an ephemeral RSA key pair");
        }

        let tokens: Arc<dyn TokenProvider> =
            Arc::new(JwtTokenService::from_config(&config.auth.jwt)?);

        let store = InMemoryCredentialStore::from_config(&config.auth);
        if store.is_empty() {
            warn!("No users configured (auth.users); every login will fail");
        }
        info!(users = store.len(), "Credential store ready");

        Ok(Self::new(
            key_store,
            Arc::new(store),
            tokens,
            Arc::new(CatalogHandle::new()),
            &config.auth.header,
            &config.auth.token_prefix,
        ))
    }
}
