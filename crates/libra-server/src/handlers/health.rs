//! Liveness and readiness probes

use crate::state::AppState;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Route, State, get, routes};
use serde::{Deserialize, Serialize};

/// Probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` or `unavailable`
    pub status: String,
    /// Whether the permission catalog is published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_ready: Option<bool>,
    /// Whether the RSA pair was generated at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral_keys: Option<bool>,
}

/// Liveness probe; always 200 once the server answers
#[get("/live")]
pub fn live() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        catalog_ready: None,
        ephemeral_keys: None,
    })
}

/// Readiness probe; 503 until the permission catalog is published
#[get("/ready")]
pub fn ready(state: &State<AppState>) -> (Status, Json<HealthResponse>) {
    let catalog_ready = state.catalog.is_ready();
    let (status, label) = if catalog_ready {
        (Status::Ok, "ok")
    } else {
        (Status::ServiceUnavailable, "unavailable")
    };
    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            catalog_ready: Some(catalog_ready),
            ephemeral_keys: Some(state.key_store.is_ephemeral()),
        }),
    )
}

/// Probe routes, mounted at `/`
pub fn routes() -> Vec<Route> {
    routes![live, ready]
}
