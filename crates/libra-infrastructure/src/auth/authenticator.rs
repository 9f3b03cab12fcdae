//! Per-request authentication

use super::gate::AuthorizationGate;
use crate::config::AuthConfig;
use libra_domain::ports::TokenProvider;
use libra_domain::{AuthRejection, Principal};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of authenticating a request that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// No credentials were presented; the route decides
    Anonymous,
    /// A valid token authorized for this request
    Authenticated(Principal),
}

/// Extracts, verifies and authorizes the bearer token of a request
#[derive(Clone)]
pub struct RequestAuthenticator {
    tokens: Arc<dyn TokenProvider>,
    gate: AuthorizationGate,
    header: String,
    prefix: String,
}

impl RequestAuthenticator {
    /// Create an authenticator reading `header` and stripping `prefix`
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        gate: AuthorizationGate,
        header: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            tokens,
            gate,
            header: header.into(),
            prefix: prefix.into(),
        }
    }

    /// Create an authenticator with the header settings from configuration
    pub fn from_config(
        tokens: Arc<dyn TokenProvider>,
        gate: AuthorizationGate,
        config: &AuthConfig,
    ) -> Self {
        Self::new(tokens, gate, &config.header, &config.token_prefix)
    }

    /// Name of the header carrying the token
    pub fn header_name(&self) -> &str {
        &self.header
    }

    /// The token in `header_value`, if it carries the expected prefix
    ///
    /// A blank token after the prefix counts as no token.
    pub fn extract_token<'a>(&self, header_value: Option<&'a str>) -> Option<&'a str> {
        header_value
            .and_then(|value| value.strip_prefix(self.prefix.as_str()))
            .filter(|token| !token.trim().is_empty())
    }

    /// Authenticate and authorize one request
    ///
    /// `header_value` is the raw value of the configured header.
    pub fn authenticate(
        &self,
        header_value: Option<&str>,
        path: &str,
        method: &str,
    ) -> Result<AuthOutcome, AuthRejection> {
        let Some(token) = self.extract_token(header_value) else {
            return Ok(AuthOutcome::Anonymous);
        };

        let claims = self.tokens.verify(token).map_err(|e| {
            let rejection = AuthRejection::from(e);
            debug!(path, method, reason = rejection.reason_code(), "Token rejected");
            rejection
        })?;

        let principal = claims.principal();
        if let Err(rejection) = self.gate.check(&principal.role, path, method) {
            warn!(
                principal_id = principal.principal_id,
                role = %principal.role,
                path,
                method,
                reason = rejection.reason_code(),
                "Request denied"
            );
            return Err(rejection);
        }

        debug!(principal_id = principal.principal_id, path, method, "Request authorized");
        Ok(AuthOutcome::Authenticated(principal))
    }
}
