//! Weekly-report manager backend: a local actix-web server over a
//! SQLite store, with docx template export.

pub mod config;
pub mod docx;
pub mod error;
pub mod services;
pub mod state;
pub mod store;

use actix_web::web;

/// Register every JSON API scope on an actix service config. Shared
/// between `main` and the integration tests.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(services::reports::configure_routes())
        .service(services::templates::configure_routes())
        .service(services::settings::configure_routes());
}
