//! Key material configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when the configured RSA key pair is absent or unusable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RsaKeyMode {
    /// Refuse to start
    Strict,
    /// Generate an ephemeral pair and warn
    #[default]
    DevFallback,
}

/// AES key configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AesConfig {
    /// Base64 encoded 32-byte key. Mandatory.
    pub key: Option<String>,
}

impl fmt::Debug for AesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesConfig")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// RSA key pair configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RsaConfig {
    /// Base64 X.509 SubjectPublicKeyInfo DER
    pub public_key: Option<String>,

    /// Base64 PKCS#8 DER
    pub private_key: Option<String>,

    /// Fallback policy
    #[serde(default)]
    pub mode: RsaKeyMode,
}

impl fmt::Debug for RsaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("mode", &self.mode)
            .finish()
    }
}

/// Encryption configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptionConfig {
    /// Server AES key
    #[serde(default)]
    pub aes: AesConfig,

    /// Server RSA key pair
    #[serde(default)]
    pub rsa: RsaConfig,

    /// Mount the AES/RSA test endpoints
    #[serde(default)]
    pub debug_endpoints: bool,
}
