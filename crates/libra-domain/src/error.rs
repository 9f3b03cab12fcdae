//! Error handling types
//!
//! Every component owns a small closed error enumeration. Component errors
//! are converted into narrower, caller-facing errors at their boundary; the
//! domain [`Error`] collects them for code paths that cross layers.

use crate::constants::{
    REASON_ACCESS_DENIED, REASON_CATALOG_NOT_READY, REASON_TOKEN_EXPIRED, REASON_TOKEN_MALFORMED,
    REASON_TOKEN_TAMPERED,
};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Libra
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error. Fatal at startup.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cryptographic primitive failure
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Login payload could not be unwrapped
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// Token issuance or verification failure
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Authentication-related error
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of the authentication error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Authentication error creation methods
impl Error {
    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
            source: None,
        }
    }
}

// Internal and infrastructure error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error must abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Failures of the symmetric and asymmetric cipher primitives
///
/// These never cross the credential boundary as-is; see [`CredentialError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Envelope is not valid Base64 or is too short to contain a nonce
    #[error("invalid ciphertext encoding")]
    InvalidCiphertext,

    /// Plaintext exceeds the asymmetric scheme's block size
    #[error("payload of {len} bytes exceeds the maximum of {max} bytes")]
    PayloadTooLarge {
        /// Size of the rejected payload
        len: usize,
        /// Largest payload the key can encrypt
        max: usize,
    },

    /// Authentication tag did not verify (wrong key or tampered data)
    #[error("authentication tag mismatch")]
    AuthenticationFailed,

    /// Asymmetric decryption failed (wrong key or corrupted padding)
    #[error("decryption failed")]
    DecryptionFailed,

    /// Key material could not be decoded or has the wrong size
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// The primitive itself failed while encrypting
    #[error("encryption failed")]
    EncryptionFailed,
}

/// Caller-facing failures of the hybrid login payload
///
/// Deliberately coarse: they never reveal which cryptographic check failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// The wrapped symmetric key could not be recovered
    #[error("invalid key envelope")]
    InvalidKeyEnvelope,

    /// The credential could not be decrypted with the recovered key
    #[error("invalid credential envelope")]
    InvalidCredentialEnvelope,
}

/// Token issuance and verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// `exp` is at or before the current time
    #[error("token expired")]
    Expired,

    /// Signature or algorithm does not verify
    #[error("token signature invalid")]
    Tampered,

    /// The token structure or its claims cannot be parsed
    #[error("token malformed")]
    Malformed,

    /// Token could not be signed
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Structured rejection produced by the request authenticator
///
/// Final for the request it was produced for.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthRejection {
    /// Token is past its expiry
    #[error("token expired")]
    TokenExpired,

    /// Token signature does not verify
    #[error("token tampered")]
    TokenTampered,

    /// Token cannot be parsed
    #[error("token malformed")]
    TokenMalformed,

    /// The authorization gate denied the request
    #[error("access denied")]
    AccessDenied,

    /// The permission catalog has not been published yet
    #[error("permission catalog not ready")]
    CatalogNotReady,
}

impl AuthRejection {
    /// Machine-readable reason code reported to clients
    pub fn reason_code(self) -> &'static str {
        match self {
            Self::TokenExpired => REASON_TOKEN_EXPIRED,
            Self::TokenTampered => REASON_TOKEN_TAMPERED,
            Self::TokenMalformed => REASON_TOKEN_MALFORMED,
            Self::AccessDenied => REASON_ACCESS_DENIED,
            Self::CatalogNotReady => REASON_CATALOG_NOT_READY,
        }
    }

    /// HTTP status code for this rejection
    pub fn status_code(self) -> u16 {
        match self {
            Self::CatalogNotReady => 503,
            Self::TokenExpired | Self::TokenTampered | Self::TokenMalformed | Self::AccessDenied => {
                403
            }
        }
    }
}

impl From<TokenError> for AuthRejection {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::TokenExpired,
            TokenError::Tampered => Self::TokenTampered,
            // A token we failed to sign cannot be presented; treat as unparseable
            TokenError::Malformed | TokenError::Signing(_) => Self::TokenMalformed,
        }
    }
}
