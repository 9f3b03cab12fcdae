//! Domain layer constants
//!
//! Constants that are part of the authentication contract itself.
//! Infrastructure-specific defaults live in `libra_infrastructure::constants`.

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// Token type reported to clients alongside an issued token
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Role assigned when a user has no explicit role
pub const DEFAULT_ROLE: &str = "USER";

// ============================================================================
// REASON CODES
// ============================================================================

/// Reason code for an expired token
pub const REASON_TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";

/// Reason code for a token whose signature does not verify
pub const REASON_TOKEN_TAMPERED: &str = "TOKEN_TAMPERED";

/// Reason code for a token that cannot be parsed
pub const REASON_TOKEN_MALFORMED: &str = "TOKEN_MALFORMED";

/// Reason code for a request denied by the authorization gate
pub const REASON_ACCESS_DENIED: &str = "ACCESS_DENIED";

/// Reason code when the permission catalog has not been published yet
pub const REASON_CATALOG_NOT_READY: &str = "CATALOG_NOT_READY";

/// Reason code for a protected route reached without credentials
pub const REASON_UNAUTHORIZED: &str = "UNAUTHORIZED";

/// Reason code for any failed login attempt
pub const REASON_INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";

/// Reason code for unanticipated failures
pub const REASON_INTERNAL_ERROR: &str = "INTERNAL_SERVER_ERROR";
