//! Cryptographic Ports

use crate::error::CredentialError;

/// Recovers a plaintext credential from a two-layer encrypted login payload
///
/// Failures are reported with [`CredentialError`] only; implementations must
/// not leak which cryptographic stage failed.
pub trait CredentialUnwrapper: Send + Sync {
    /// Unwrap `encrypted_credential` using the symmetric key sealed in
    /// `encrypted_symmetric_key`
    fn unwrap_credential(
        &self,
        encrypted_credential: &str,
        encrypted_symmetric_key: &str,
    ) -> Result<String, CredentialError>;

    /// Base64 X.509 public key clients use to wrap their symmetric key
    fn public_key_base64(&self) -> String;
}
