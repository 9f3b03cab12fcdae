//! RSA-2048 / PKCS#1 v1.5 key wrapping

use crate::constants::{RSA_KEY_BITS, RSA_PKCS1_PADDING_OVERHEAD};
use aes_gcm::aead::OsRng as AeadOsRng;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use libra_domain::CryptoError;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use std::fmt;

/// RSA key pair
///
/// Textual forms are Base64 X.509 SubjectPublicKeyInfo DER for the public
/// half and Base64 PKCS#8 DER for the private half.
#[derive(Clone)]
pub struct KeyPair {
    public_key: RsaPublicKey,
    private_key: RsaPrivateKey,
}

impl KeyPair {
    /// Generate a fresh 2048-bit pair
    pub fn generate() -> Result<Self, CryptoError> {
        let private_key = RsaPrivateKey::new(&mut AeadOsRng, RSA_KEY_BITS)
            .map_err(|e| CryptoError::InvalidKey(format!("key generation failed: {e}")))?;
        let public_key = RsaPublicKey::from(&private_key);
        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Decode a pair and check that both halves belong together
    pub fn from_base64(public_key: &str, private_key: &str) -> Result<Self, CryptoError> {
        let public_key = AsymmetricCipher::public_key_from_base64(public_key)?;

        let der = STANDARD
            .decode(private_key.trim())
            .map_err(|e| CryptoError::InvalidKey(format!("private key is not Base64: {e}")))?;
        let private_key = RsaPrivateKey::from_pkcs8_der(&der)
            .map_err(|e| CryptoError::InvalidKey(format!("private key is not PKCS#8: {e}")))?;

        if RsaPublicKey::from(&private_key) != public_key {
            return Err(CryptoError::InvalidKey(
                "public and private keys do not belong together".to_string(),
            ));
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Public half
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// Private half
    pub(crate) fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// Base64 X.509 form of the public key
    pub fn public_key_base64(&self) -> Result<String, CryptoError> {
        let der = self
            .public_key
            .to_public_key_der()
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Ok(STANDARD.encode(der.as_bytes()))
    }

    /// Base64 PKCS#8 form of the private key, for provisioning new keys only
    pub fn private_key_base64(&self) -> Result<String, CryptoError> {
        let der = self
            .private_key
            .to_pkcs8_der()
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Ok(STANDARD.encode(der.as_bytes()))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("bits", &(self.public_key.size() * 8))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// RSA PKCS#1 v1.5 cipher producing Base64 envelopes
pub struct AsymmetricCipher;

impl AsymmetricCipher {
    /// Generate a fresh 2048-bit key pair
    pub fn generate_key_pair() -> Result<KeyPair, CryptoError> {
        KeyPair::generate()
    }

    /// Largest payload `public_key` can encrypt
    pub fn max_payload_len(public_key: &RsaPublicKey) -> usize {
        public_key.size().saturating_sub(RSA_PKCS1_PADDING_OVERHEAD)
    }

    /// Decode a Base64 X.509 public key
    pub fn public_key_from_base64(encoded: &str) -> Result<RsaPublicKey, CryptoError> {
        let der = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CryptoError::InvalidKey(format!("public key is not Base64: {e}")))?;
        RsaPublicKey::from_public_key_der(&der)
            .map_err(|e| CryptoError::InvalidKey(format!("public key is not X.509: {e}")))
    }

    /// Encrypt `data` with `public_key`
    pub fn encrypt(data: &[u8], public_key: &RsaPublicKey) -> Result<String, CryptoError> {
        let max = Self::max_payload_len(public_key);
        if data.len() > max {
            return Err(CryptoError::PayloadTooLarge {
                len: data.len(),
                max,
            });
        }

        let ciphertext = public_key
            .encrypt(&mut AeadOsRng, Pkcs1v15Encrypt, data)
            .map_err(|_| CryptoError::EncryptionFailed)?;
        Ok(STANDARD.encode(ciphertext))
    }

    /// Decrypt an envelope with `private_key`; the payload must be UTF-8
    pub fn decrypt(envelope: &str, private_key: &RsaPrivateKey) -> Result<String, CryptoError> {
        let ciphertext = STANDARD
            .decode(envelope)
            .map_err(|_| CryptoError::InvalidCiphertext)?;

        let plaintext = private_key
            .decrypt(Pkcs1v15Encrypt, &ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)?;

        String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
    }
}
