//! AES-256-GCM sealing of short text payloads

use crate::constants::{AES_GCM_KEY_SIZE, AES_GCM_NONCE_SIZE};
use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng as AeadOsRng, rand_core::RngCore as AeadRngCore},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use libra_domain::CryptoError;
use std::fmt;

/// 256-bit AES key
///
/// `Debug` never prints the key bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey([u8; AES_GCM_KEY_SIZE]);

impl SymmetricKey {
    /// Build a key from raw bytes; exactly 32 bytes are required
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let key: [u8; AES_GCM_KEY_SIZE] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!(
                "expected {AES_GCM_KEY_SIZE} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    /// Decode a key from standard, padded Base64
    pub fn from_base64(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CryptoError::InvalidKey(format!("not valid Base64: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Standard, padded Base64 form
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(<redacted>)")
    }
}

/// AES-256-GCM cipher producing `Base64(nonce || ciphertext || tag)` envelopes
pub struct SymmetricCipher;

impl SymmetricCipher {
    /// Generate a random key from the OS CSPRNG
    pub fn generate_key() -> SymmetricKey {
        let mut key = [0u8; AES_GCM_KEY_SIZE];
        AeadOsRng.fill_bytes(&mut key);
        SymmetricKey(key)
    }

    /// Encrypt `plaintext` under a fresh random nonce
    pub fn encrypt(plaintext: &str, key: &SymmetricKey) -> Result<String, CryptoError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        let nonce = Aes256Gcm::generate_nonce(&mut AeadOsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let mut envelope = Vec::with_capacity(AES_GCM_NONCE_SIZE + ciphertext.len());
        envelope.extend_from_slice(&nonce);
        envelope.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(envelope))
    }

    /// Decrypt an envelope produced by [`SymmetricCipher::encrypt`]
    pub fn decrypt(envelope: &str, key: &SymmetricKey) -> Result<String, CryptoError> {
        let bytes = STANDARD
            .decode(envelope)
            .map_err(|_| CryptoError::InvalidCiphertext)?;
        if bytes.len() <= AES_GCM_NONCE_SIZE {
            return Err(CryptoError::InvalidCiphertext);
        }

        let (nonce, ciphertext) = bytes.split_at(AES_GCM_NONCE_SIZE);
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::AuthenticationFailed)?;

        String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidCiphertext)
    }
}
