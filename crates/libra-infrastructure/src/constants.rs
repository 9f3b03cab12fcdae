//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Contract-level constants are defined in `libra_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "libra.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "libra";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "LIBRA";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SYMMETRIC CIPHER CONSTANTS
// ============================================================================

/// AES-GCM key size in bytes (256 bits)
pub const AES_GCM_KEY_SIZE: usize = 32;

/// AES-GCM nonce size in bytes (96 bits)
pub const AES_GCM_NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size in bytes (128 bits)
pub const AES_GCM_TAG_SIZE: usize = 16;

// ============================================================================
// ASYMMETRIC CIPHER CONSTANTS
// ============================================================================

/// RSA modulus size in bits
pub const RSA_KEY_BITS: usize = 2048;

/// Bytes consumed by PKCS#1 v1.5 encryption padding
pub const RSA_PKCS1_PADDING_OVERHEAD: usize = 11;

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// JWT default expiration time in seconds (24 hours)
pub const JWT_DEFAULT_EXPIRATION_SECS: u64 = 86400;

/// Minimum JWT signing secret length in bytes
pub const JWT_MIN_SECRET_LEN: usize = 32;

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Bearer token prefix
pub const BEARER_PREFIX: &str = "Bearer ";

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = 12;

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "LIBRA_LOG";

/// Log file stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "libra";
