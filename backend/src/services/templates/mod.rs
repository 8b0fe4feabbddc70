//! # Template Service Module
//!
//! This module aggregates all API endpoints related to the management of
//! uploaded docx templates. It acts as a router, directing incoming HTTP
//! requests under the `/api/templates` path to the appropriate handler
//! logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `upload`: Accepts a multipart `.docx` upload and stores it.
//! - `list`: Lists the metadata of every stored template.
//! - `get`: Retrieves one template's metadata.
//! - `delete`: Removes a template and its stored file.

mod delete;
mod get;
mod list;
mod upload;

use std::path::{Path, PathBuf};

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::model::template::TemplateMeta;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template routes.
///
/// This function groups the template endpoints under the common `/api/templates` path.
///
/// # Registered Routes:
///
/// *   **`POST /upload`**:
///     - **Handler**: `upload::process`
///     - **Description**: Accepts a multipart upload of a `.docx` template. An
///       optional `json` part carrying a `TemplateUpload` may name an existing
///       template id to replace; otherwise a fresh id is assigned. Returns the
///       stored metadata as JSON.
///
/// *   **`GET /`**:
///     - **Handler**: `list::process`
///     - **Description**: Lists the metadata of every stored template, newest
///       upload first.
///
/// *   **`GET /{template_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Retrieves one template's metadata by its id.
///
/// *   **`POST /{template_id}/delete`**:
///     - **Handler**: `delete::process`
///     - **Description**: Removes the metadata row and the stored file.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/upload", post().to(upload::process))
        .route("/{template_id}", get().to(get::process))
        .route("/{template_id}/delete", post().to(delete::process))
}

/// Location of a template's stored bytes inside the data directory.
/// The content hash is part of the name, so a replacement upload never
/// overwrites the file it supersedes.
pub(crate) fn stored_file_path(data_dir: &Path, meta: &TemplateMeta) -> PathBuf {
    data_dir.join(format!("{}_{}.docx", meta.id, meta.content_md5))
}
