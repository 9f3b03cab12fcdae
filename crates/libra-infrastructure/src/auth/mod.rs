//! Authentication and authorization
//!
//! Stateless JWT sessions plus a declarative role → permission → URL
//! pattern catalog consulted on every request.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`token`] | HS256 token issuance and verification |
//! | [`catalog`] | Validated permission catalog and its atomic publication |
//! | [`matcher`] | URL pattern dialects |
//! | [`gate`] | Role/method/path authorization decision |
//! | [`authenticator`] | Per-request token extraction, verification and gating |
//! | [`credentials`] | bcrypt-backed in-memory credential store |

pub mod authenticator;
pub mod catalog;
pub mod clock;
pub mod credentials;
pub mod gate;
pub mod matcher;
pub mod token;

pub use authenticator::{AuthOutcome, RequestAuthenticator};
pub use catalog::{CatalogHandle, CatalogLoader, Permission, PermissionCatalog, Role};
pub use clock::{FixedClock, SystemClock};
pub use credentials::InMemoryCredentialStore;
pub use gate::AuthorizationGate;
pub use matcher::UrlPatternMatcher;
pub use token::JwtTokenService;
