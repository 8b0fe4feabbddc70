//! # Settings Service Module
//!
//! Endpoints for the export configuration under `/api/settings`.
//!
//! ## Sub-modules:
//! - `get`: Returns the current export configuration.
//! - `save`: Updates the export filename pattern.

mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for the settings API endpoints.
const API_PATH: &str = "/api/settings";

/// Configures and returns the Actix `Scope` for the settings routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/save", post().to(save::process))
}
