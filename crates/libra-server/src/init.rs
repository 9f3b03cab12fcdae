//! Server Initialization
//!
//! Startup is two-phase:
//!
//! 1. Load configuration, initialise logging and build every service. The
//!    permission catalog handle is created empty.
//! 2. Load and validate the complete catalog, then publish it. Protected
//!    routes answer `503 CATALOG_NOT_READY` until this happens.
//!
//! Any configuration error aborts startup before the server binds.

use std::path::Path;

use libra_domain::{Error, Result};
use libra_infrastructure::auth::CatalogLoader;
use libra_infrastructure::config::{AppConfig, ConfigLoader};
use libra_infrastructure::logging::init_logging;
use rocket::{Build, Rocket};
use tracing::{info, warn};

use crate::auth::{Cors, error_catchers};
use crate::constants::{AUTH_MOUNT, ENCRYPTION_MOUNT};
use crate::handlers::{auth, encryption, health};
use crate::state::AppState;

/// Run the Libra server until shutdown
pub async fn run_server(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(config.logging.clone())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting Libra server"
    );

    let state = AppState::from_config(&config)?;

    let catalog = CatalogLoader::from_config(&config.catalog)?;
    state.catalog.publish(catalog);

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    build_rocket(state, &config)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| Error::infrastructure(format!("HTTP server failed: {e}")))?;

    info!("Libra server stopped");
    Ok(())
}

/// Load configuration from an optional explicit path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Build the Rocket application over `state`
///
/// Mounts the probes, login and public key routes, the debug cipher routes
/// when enabled, the error catchers and the CORS fairing when origins are
/// configured.
pub fn build_rocket(state: AppState, config: &AppConfig) -> Rocket<Build> {
    let mut rocket = rocket::build()
        .manage(state)
        .mount("/", health::routes())
        .mount(AUTH_MOUNT, auth::routes())
        .mount(ENCRYPTION_MOUNT, encryption::routes())
        .register("/", error_catchers());

    if config.encryption.debug_endpoints {
        warn!("Debug encryption endpoints are enabled; do not use in production");
        rocket = rocket.mount(ENCRYPTION_MOUNT, encryption::debug_routes());
    }

    let cors = &config.server.cors;
    if cors.is_enabled() {
        if cors.allows_any_origin() {
            warn!("CORS allows any origin (server.cors.allowed_origins contains \"*\")");
        }
        info!(origins = ?cors.allowed_origins, "CORS enabled");
        rocket = rocket.attach(Cors::from_config(cors));
    }

    rocket
}
