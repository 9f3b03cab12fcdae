//! Login
//!
//! The client seals its password with a one-off AES key and wraps that key
//! with the server public key. Every failure, from a malformed body to a
//! wrong password, produces the same 400 body.

use crate::auth::ErrorResponse;
use crate::state::AppState;
use libra_domain::{LoginRequest, LoginResponse, Result};
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{Route, State, post, routes};
use tracing::{debug, info, warn};

/// Exchange a hybrid-encrypted login payload for a bearer token
#[post("/login", data = "<body>")]
pub async fn login(
    state: &State<AppState>,
    body: std::result::Result<Json<LoginRequest>, json::Error<'_>>,
) -> std::result::Result<Json<LoginResponse>, (Status, Json<ErrorResponse>)> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => {
            debug!(error = %e, "Login body rejected");
            return Err(ErrorResponse::invalid_credentials());
        }
    };

    match authenticate(state, &request).await {
        Ok(response) => {
            info!(user_id = response.user_id, role = %response.role, "Login succeeded");
            Ok(Json(response))
        }
        Err(e) => {
            warn!(username = %request.username, error = %e, "Login failed");
            Err(ErrorResponse::invalid_credentials())
        }
    }
}

async fn authenticate(state: &AppState, request: &LoginRequest) -> Result<LoginResponse> {
    let password = state
        .unwrapper
        .unwrap_credential(&request.encrypted_password, &request.encrypted_aes_key)?;
    let user = state
        .credentials
        .verify_credentials(&request.username, &password)
        .await?;
    let token = state.tokens.issue_default(user.user_id, &user.role)?;
    Ok(LoginResponse::bearer(token, user.user_id, user.role))
}

/// Authentication routes, mounted at `/api/auth`
pub fn routes() -> Vec<Route> {
    routes![login]
}
