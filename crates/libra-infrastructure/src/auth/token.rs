//! HS256 session tokens

use super::clock::SystemClock;
use crate::config::JwtConfig;
use crate::constants::JWT_MIN_SECRET_LEN;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use libra_domain::ports::{Clock, TokenProvider};
use libra_domain::{Error, Result, TokenClaims, TokenError};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const PINNED_ALGORITHM: &str = "HS256";

/// JWT implementation of [`TokenProvider`]
///
/// The algorithm is pinned to HS256. Expiry is checked against the injected
/// [`Clock`] after the signature verifies.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    /// Create a token service
    ///
    /// `secret` must be at least 32 bytes.
    pub fn new(secret: &str, default_ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self> {
        if secret.len() < JWT_MIN_SECRET_LEN {
            return Err(Error::configuration(format!(
                "JWT secret must be at least {JWT_MIN_SECRET_LEN} bytes long"
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock instead
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl,
            clock,
        })
    }

    /// Create a token service on the wall clock from configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self> {
        Self::new(
            &config.secret,
            Duration::from_secs(config.expiration_secs),
            Arc::new(SystemClock),
        )
    }

    /// Lifetime used by [`TokenProvider::issue_default`]
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("algorithm", &PINNED_ALGORITHM)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenProvider for JwtTokenService {
    fn issue(
        &self,
        principal_id: i64,
        role: &str,
        ttl: Duration,
    ) -> std::result::Result<String, TokenError> {
        let ttl_secs = i64::try_from(ttl.as_secs())
            .map_err(|_| TokenError::Signing("token lifetime out of range".to_string()))?;
        let claims = TokenClaims::new(principal_id, role, self.clock.now(), ttl_secs);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn issue_default(
        &self,
        principal_id: i64,
        role: &str,
    ) -> std::result::Result<String, TokenError> {
        self.issue(principal_id, role, self.default_ttl)
    }

    fn verify(&self, token: &str) -> std::result::Result<TokenClaims, TokenError> {
        check_structure(token)?;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| classify(e.kind()))?
            .claims;

        if !claims.is_consistent() {
            debug!(uid = claims.uid, "Token subject does not match uid");
            return Err(TokenError::Malformed);
        }
        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

/// Check the token's structure before the library sees it
///
/// Any header whose `alg` is not HS256 is rejected as a signature failure,
/// since unsupported names such as `none` would otherwise surface as a parse
/// failure. Once this passes, the header and claims segments are known to
/// decode, so a remaining decoding failure can only come from the signature.
fn check_structure(token: &str) -> std::result::Result<(), TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, _signature] = segments.as_slice() else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| TokenError::Malformed)?;
    let header: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)?;

    match header.get("alg").and_then(serde_json::Value::as_str) {
        Some(PINNED_ALGORITHM) => {}
        Some(_) => return Err(TokenError::Tampered),
        None => return Err(TokenError::Malformed),
    }

    URL_SAFE_NO_PAD
        .decode(payload)
        .map(drop)
        .map_err(|_| TokenError::Malformed)
}

/// Map a decoding failure that survived [`check_structure`]
fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm | ErrorKind::Base64(_) => {
            TokenError::Tampered
        }
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
