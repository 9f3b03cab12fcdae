//! Process-wide key material
//!
//! Built once at startup from [`EncryptionConfig`] and immutable afterwards.

use super::asymmetric::{AsymmetricCipher, KeyPair};
use super::symmetric::{SymmetricCipher, SymmetricKey};
use crate::config::{EncryptionConfig, RsaKeyMode};
use libra_domain::CryptoError;
use libra_domain::error::{Error, Result};
use rsa::RsaPublicKey;
use tracing::{debug, info, warn};

/// Holds the server symmetric key and RSA key pair
///
/// The private key is never exposed; callers go through
/// [`KeyStore::decrypt_with_private_key`].
#[derive(Debug)]
pub struct KeyStore {
    symmetric_key: SymmetricKey,
    key_pair: KeyPair,
    public_key_base64: String,
    ephemeral: bool,
}

impl KeyStore {
    /// Assemble a key store from already decoded material
    pub fn new(symmetric_key: SymmetricKey, key_pair: KeyPair) -> Result<Self> {
        Self::assemble(symmetric_key, key_pair, false)
    }

    /// Build the key store from configuration
    ///
    /// The AES key is mandatory. A missing or unusable RSA pair is fatal in
    /// [`RsaKeyMode::Strict`] and replaced by an ephemeral pair in
    /// [`RsaKeyMode::DevFallback`].
    pub fn from_config(config: &EncryptionConfig) -> Result<Self> {
        let symmetric_key = decode_symmetric_key(config.aes.key.as_deref())?;

        match decode_key_pair(
            config.rsa.public_key.as_deref(),
            config.rsa.private_key.as_deref(),
        ) {
            Ok(key_pair) => {
                info!("Loaded RSA key pair from configuration");
                Self::assemble(symmetric_key, key_pair, false)
            }
            Err(reason) => match config.rsa.mode {
                RsaKeyMode::Strict => Err(Error::configuration(format!(
                    "RSA key pair unusable in strict mode: {reason}"
                ))),
                RsaKeyMode::DevFallback => {
                    warn!(
                        reason = %reason,
                        "RSA key pair missing or invalid; generating an EPHEMERAL pair. \
                         Keys are not persisted and every restart invalidates wrapped client keys. \
                         Run `libra keygen` and configure encryption.rsa for production"
                    );
                    let key_pair = KeyPair::generate().map_err(|e| {
                        Error::configuration(format!("Failed to generate RSA key pair: {e}"))
                    })?;
                    Self::assemble(symmetric_key, key_pair, true)
                }
            },
        }
    }

    fn assemble(symmetric_key: SymmetricKey, key_pair: KeyPair, ephemeral: bool) -> Result<Self> {
        let public_key_base64 = key_pair.public_key_base64()?;
        Ok(Self {
            symmetric_key,
            key_pair,
            public_key_base64,
            ephemeral,
        })
    }

    /// Server symmetric key
    pub fn symmetric_key(&self) -> &SymmetricKey {
        &self.symmetric_key
    }

    /// Server public key
    pub fn public_key(&self) -> &RsaPublicKey {
        self.key_pair.public_key()
    }

    /// Base64 X.509 form of the server public key
    pub fn public_key_base64(&self) -> &str {
        &self.public_key_base64
    }

    /// Whether the RSA pair was generated at startup
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    /// Decrypt an RSA envelope addressed to this server
    pub fn decrypt_with_private_key(
        &self,
        envelope: &str,
    ) -> std::result::Result<String, CryptoError> {
        AsymmetricCipher::decrypt(envelope, self.key_pair.private_key())
    }

    /// Encrypt with the server public key
    pub fn encrypt_with_public_key(&self, data: &[u8]) -> std::result::Result<String, CryptoError> {
        AsymmetricCipher::encrypt(data, self.public_key())
    }

    /// Seal text under the server symmetric key
    pub fn seal(&self, plaintext: &str) -> std::result::Result<String, CryptoError> {
        SymmetricCipher::encrypt(plaintext, &self.symmetric_key)
    }

    /// Open an envelope sealed under the server symmetric key
    pub fn open(&self, envelope: &str) -> std::result::Result<String, CryptoError> {
        SymmetricCipher::decrypt(envelope, &self.symmetric_key)
    }
}

fn decode_symmetric_key(encoded: Option<&str>) -> Result<SymmetricKey> {
    let encoded = encoded
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| Error::configuration("AES key is not configured (encryption.aes.key)"))?;
    SymmetricKey::from_base64(encoded)
        .map_err(|e| Error::configuration_with_source("Invalid AES key (encryption.aes.key)", e))
}

fn decode_key_pair(
    public_key: Option<&str>,
    private_key: Option<&str>,
) -> std::result::Result<KeyPair, CryptoError> {
    match (public_key, private_key) {
        (Some(public_key), Some(private_key)) => {
            let pair = KeyPair::from_base64(public_key, private_key)?;
            debug!("RSA key pair decoded");
            Ok(pair)
        }
        _ => Err(CryptoError::InvalidKey(
            "encryption.rsa.public_key and encryption.rsa.private_key must both be set"
                .to_string(),
        )),
    }
}
