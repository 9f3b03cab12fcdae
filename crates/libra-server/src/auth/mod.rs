//! HTTP authentication layer
//!
//! Request guard, structured error bodies with their catchers, and the CORS
//! fairing.

pub mod cors;
pub mod guard;
pub mod responses;

pub use cors::Cors;
pub use guard::{AuthGuardError, Authenticated};
pub use responses::{ErrorResponse, error_catchers, recorded_rejection};
