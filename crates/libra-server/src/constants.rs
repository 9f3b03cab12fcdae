//! Server layer constants
//!
//! Route paths and client-facing messages. Reason codes are part of the
//! domain contract and live in `libra_domain::constants`.

// ============================================================================
// ROUTES
// ============================================================================

/// Mount point of the authentication routes
pub const AUTH_MOUNT: &str = "/api/auth";

/// Mount point of the encryption routes
pub const ENCRYPTION_MOUNT: &str = "/api/encryption";

// ============================================================================
// CLIENT MESSAGES
// ============================================================================

/// Body message for every failed login
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Body message for token and permission rejections
pub const MSG_ACCESS_DENIED: &str = "Access denied";

/// Body message for protected routes reached without a token
pub const MSG_AUTHENTICATION_REQUIRED: &str = "Authentication required";

/// Body message while the permission catalog is unpublished
pub const MSG_NOT_READY: &str = "Service is not ready";

/// Body message for failed debug encryption requests
pub const MSG_ENCRYPTION_FAILED: &str = "Encryption operation failed";

/// Body message for unanticipated failures
pub const MSG_INTERNAL_ERROR: &str = "Internal server error";

// ============================================================================
// GENERIC REASON CODES
// ============================================================================

/// Reason code for malformed requests outside the login flow
pub const REASON_BAD_REQUEST: &str = "BAD_REQUEST";

/// Reason code for unknown routes
pub const REASON_NOT_FOUND: &str = "NOT_FOUND";

/// Reason code for request bodies that fail to deserialize
pub const REASON_UNPROCESSABLE: &str = "UNPROCESSABLE_ENTITY";

/// Reason code while the server cannot serve requests
pub const REASON_SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
