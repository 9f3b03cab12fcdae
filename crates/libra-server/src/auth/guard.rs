//! Bearer token request guard
//!
//! Add [`Authenticated`] to a route to make it protected:
//!
//! ```rust,ignore
//! #[put("/api/books/<id>")]
//! fn update_book(user: Authenticated, id: i64) -> String {
//!     format!("{} updated {id}", user.principal())
//! }
//! ```
//!
//! The guard verifies the token and asks the authorization gate whether the
//! token's role may call this path with this method. Routes without the
//! guard are public.

use super::responses::{record_rejection, rejection_status};
use crate::state::AppState;
use libra_domain::{AuthRejection, Principal};
use libra_infrastructure::auth::AuthOutcome;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tracing::error;

/// Principal of a request that passed authentication and authorization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated(pub Principal);

impl Authenticated {
    /// The authenticated principal
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

/// Why the guard failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthGuardError {
    /// No token was presented
    MissingCredentials,
    /// The token or the permission check failed
    Rejected(AuthRejection),
    /// [`AppState`] is not managed by this Rocket instance
    NotConfigured,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = AuthGuardError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(state) = request.rocket().state::<AppState>() else {
            error!("Protected route reached without managed AppState");
            return Outcome::Error((Status::InternalServerError, AuthGuardError::NotConfigured));
        };

        let authenticator = &state.authenticator;
        let header = request.headers().get_one(authenticator.header_name());
        let path = request.uri().path();

        match authenticator.authenticate(header, path.as_str(), request.method().as_str()) {
            Ok(AuthOutcome::Authenticated(principal)) => Outcome::Success(Self(principal)),
            Ok(AuthOutcome::Anonymous) => Outcome::Error((
                Status::Unauthorized,
                AuthGuardError::MissingCredentials,
            )),
            Err(rejection) => {
                record_rejection(request, rejection);
                Outcome::Error((
                    rejection_status(rejection),
                    AuthGuardError::Rejected(rejection),
                ))
            }
        }
    }
}
