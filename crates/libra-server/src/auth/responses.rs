//! Error bodies and catchers
//!
//! Every error leaves the server as `{ "error": <REASON_CODE>, "message": .. }`.
//! Guards record the rejection in the request-local cache so the catcher for
//! the resulting status can report the precise reason code.

use crate::constants::{
    MSG_ACCESS_DENIED, MSG_AUTHENTICATION_REQUIRED, MSG_ENCRYPTION_FAILED,
    MSG_INTERNAL_ERROR, MSG_INVALID_CREDENTIALS, MSG_NOT_READY, REASON_BAD_REQUEST,
    REASON_NOT_FOUND, REASON_SERVICE_UNAVAILABLE, REASON_UNPROCESSABLE,
};
use libra_domain::AuthRejection;
use libra_domain::constants::{
    REASON_ACCESS_DENIED, REASON_INTERNAL_ERROR, REASON_INVALID_CREDENTIALS,
    REASON_UNAUTHORIZED,
};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};
use serde::Serialize;

/// Error body returned by every failing route
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable reason code
    pub error: &'static str,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }

    /// Uniform body for every failed login
    pub fn invalid_credentials() -> (Status, Json<Self>) {
        (
            Status::BadRequest,
            Json(Self::new(REASON_INVALID_CREDENTIALS, MSG_INVALID_CREDENTIALS)),
        )
    }

    /// Protected route reached without a token
    pub fn unauthorized() -> (Status, Json<Self>) {
        (
            Status::Unauthorized,
            Json(Self::new(REASON_UNAUTHORIZED, MSG_AUTHENTICATION_REQUIRED)),
        )
    }

    /// Debug encryption request that could not be served
    pub fn encryption_failed() -> (Status, Json<Self>) {
        (
            Status::BadRequest,
            Json(Self::new(REASON_BAD_REQUEST, MSG_ENCRYPTION_FAILED)),
        )
    }

    /// Body for an authenticator rejection
    pub fn for_rejection(rejection: AuthRejection) -> Self {
        let message = match rejection {
            AuthRejection::CatalogNotReady => MSG_NOT_READY,
            _ => MSG_ACCESS_DENIED,
        };
        Self::new(rejection.reason_code(), message)
    }
}

/// HTTP status for an authenticator rejection
pub fn rejection_status(rejection: AuthRejection) -> Status {
    Status::from_code(rejection.status_code()).unwrap_or(Status::Forbidden)
}

#[derive(Debug, Clone, Copy)]
struct RecordedRejection(Option<AuthRejection>);

/// Remember `rejection` for the catchers of this request
///
/// Only the first rejection of a request is kept.
pub(crate) fn record_rejection(request: &Request<'_>, rejection: AuthRejection) {
    request.local_cache(|| RecordedRejection(Some(rejection)));
}

/// The rejection recorded for this request, if any
pub fn recorded_rejection(request: &Request<'_>) -> Option<AuthRejection> {
    request.local_cache(|| RecordedRejection(None)).0
}

#[catch(400)]
fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(REASON_BAD_REQUEST, "Bad request"))
}

#[catch(401)]
fn unauthorized() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        REASON_UNAUTHORIZED,
        MSG_AUTHENTICATION_REQUIRED,
    ))
}

#[catch(403)]
fn forbidden(request: &Request<'_>) -> Json<ErrorResponse> {
    let body = match recorded_rejection(request) {
        Some(rejection) => ErrorResponse::for_rejection(rejection),
        None => ErrorResponse::new(REASON_ACCESS_DENIED, MSG_ACCESS_DENIED),
    };
    Json(body)
}

#[catch(404)]
fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(REASON_NOT_FOUND, "Resource not found"))
}

#[catch(422)]
fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        REASON_UNPROCESSABLE,
        "Request body could not be parsed",
    ))
}

#[catch(500)]
fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(REASON_INTERNAL_ERROR, MSG_INTERNAL_ERROR))
}

#[catch(503)]
fn service_unavailable(request: &Request<'_>) -> Json<ErrorResponse> {
    let body = match recorded_rejection(request) {
        Some(rejection) => ErrorResponse::for_rejection(rejection),
        None => ErrorResponse::new(REASON_SERVICE_UNAVAILABLE, MSG_NOT_READY),
    };
    Json(body)
}

/// Catchers rendering [`ErrorResponse`] bodies
pub fn error_catchers() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        forbidden,
        not_found,
        unprocessable,
        internal_error,
        service_unavailable
    ]
}
