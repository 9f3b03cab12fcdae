//! Hybrid unwrapping of login payloads
//!
//! The client seals its password with a one-off AES key, then wraps the
//! Base64 form of that key with the server RSA public key.

use super::asymmetric::AsymmetricCipher;
use super::keystore::KeyStore;
use super::symmetric::{SymmetricCipher, SymmetricKey};
use libra_domain::ports::CredentialUnwrapper;
use libra_domain::{CredentialError, CryptoError};
use rsa::RsaPublicKey;
use std::sync::Arc;
use tracing::debug;

/// [`CredentialUnwrapper`] backed by the server [`KeyStore`]
#[derive(Debug, Clone)]
pub struct HybridCredentialUnwrapper {
    key_store: Arc<KeyStore>,
}

impl HybridCredentialUnwrapper {
    /// Create an unwrapper over `key_store`
    pub fn new(key_store: Arc<KeyStore>) -> Self {
        Self { key_store }
    }

    /// Wrap a symmetric key for `public_key`, as a client does
    pub fn wrap_symmetric_key(
        key: &SymmetricKey,
        public_key: &RsaPublicKey,
    ) -> Result<String, CryptoError> {
        AsymmetricCipher::encrypt(key.to_base64().as_bytes(), public_key)
    }
}

impl CredentialUnwrapper for HybridCredentialUnwrapper {
    fn unwrap_credential(
        &self,
        encrypted_credential: &str,
        encrypted_symmetric_key: &str,
    ) -> Result<String, CredentialError> {
        let key_text = self
            .key_store
            .decrypt_with_private_key(encrypted_symmetric_key)
            .map_err(|e| {
                debug!(error = %e, "Key envelope rejected");
                CredentialError::InvalidKeyEnvelope
            })?;

        let key = SymmetricKey::from_base64(&key_text).map_err(|e| {
            debug!(error = %e, "Unwrapped key is not a valid AES key");
            CredentialError::InvalidKeyEnvelope
        })?;

        SymmetricCipher::decrypt(encrypted_credential, &key).map_err(|e| {
            debug!(error = %e, "Credential envelope rejected");
            CredentialError::InvalidCredentialEnvelope
        })
    }

    fn public_key_base64(&self) -> String {
        self.key_store.public_key_base64().to_string()
    }
}

/// Seal `credential` for the server owning `public_key`
///
/// Returns `(encrypted_credential, encrypted_symmetric_key)`, the client half
/// of the login handshake.
pub fn seal_credential(
    credential: &str,
    public_key: &RsaPublicKey,
) -> Result<(String, String), CryptoError> {
    let key = SymmetricCipher::generate_key();
    let encrypted_credential = SymmetricCipher::encrypt(credential, &key)?;
    let encrypted_key = HybridCredentialUnwrapper::wrap_symmetric_key(&key, public_key)?;
    Ok((encrypted_credential, encrypted_key))
}
