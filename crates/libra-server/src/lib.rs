//! # Libra Server
//!
//! HTTP surface of the Libra authentication subsystem, built on Rocket.
//!
//! Clients fetch the server RSA public key, seal their password with a
//! one-off AES key, wrap that key with the public key and exchange the pair
//! for a bearer token. Protected routes declare the [`Authenticated`] guard,
//! which verifies the token and checks the caller's role against the
//! permission catalog for the request path and method.
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/live` | Liveness probe |
//! | `GET` | `/ready` | Readiness probe, 503 until the catalog is published |
//! | `POST` | `/api/auth/login` | Hybrid-encrypted login |
//! | `GET` | `/api/encryption/rsa/public-key` | Server public key |
//! | `POST` | `/api/encryption/{aes,rsa}/{encrypt,decrypt}` | Debug only |
//! | `POST` | `/api/encryption/hybrid/encrypt-aes-key` | Debug only |
//!
//! None of these routes declare [`Authenticated`], so a token sent to them is
//! ignored rather than verified. Only routes that take the guard run the
//! token check and the catalog lookup.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AppState`] | Services shared by every route |
//! | [`Authenticated`] | Request guard for protected routes |
//! | [`ErrorResponse`] | Body of every error response |

pub mod auth;
pub mod constants;
pub mod handlers;
pub mod init;
pub mod keygen;
pub mod state;

pub use auth::{Authenticated, ErrorResponse};
pub use init::{build_rocket, load_config, run_server};
pub use keygen::run_keygen;
pub use state::AppState;
