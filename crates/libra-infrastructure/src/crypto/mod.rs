//! Cryptographic services module
//!
//! This module provides the primitives behind the login handshake:
//! - AES-256-GCM sealing of credentials
//! - RSA-2048 wrapping of one-off symmetric keys
//! - The process-wide key store
//! - Hybrid unwrapping of login payloads

mod asymmetric;
mod hybrid;
mod keystore;
mod symmetric;

pub use asymmetric::{AsymmetricCipher, KeyPair};
pub use hybrid::{HybridCredentialUnwrapper, seal_credential};
pub use keystore::KeyStore;
pub use symmetric::{SymmetricCipher, SymmetricKey};

// Key types surface in public signatures
pub use rsa::{RsaPrivateKey, RsaPublicKey};
