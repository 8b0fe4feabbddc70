//! # Report Service Module
//!
//! This module aggregates all API endpoints for weekly report records.
//! It acts as a router, directing incoming HTTP requests under the
//! `/api/reports` path to the handler logic defined in its sub-modules,
//! and hosts the field validation shared by the create and update
//! handlers.
//!
//! ## Sub-modules:
//! - `list`: Returns all stored reports, newest first.
//! - `save`: Creates a new report from a validated JSON payload.
//! - `get`: Retrieves a single report by id.
//! - `update`: Applies a partial update to an existing report.
//! - `delete`: Removes a report permanently.
//! - `defaults`: Prefill values for the new-report form.
//! - `export`: Renders a report into an uploaded docx template.

mod defaults;
mod delete;
mod export;
mod get;
mod list;
mod save;
mod update;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

use crate::error::Error;

/// The base path for all report-related API endpoints.
const API_PATH: &str = "/api/reports";

/// Configures and returns the Actix `Scope` for all report routes.
///
/// This function groups the report endpoints under the common `/api/reports` path.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns all stored reports as JSON, ordered newest
///       date first.
///
/// *   **`POST /save`**:
///     - **Handler**: `save::process`
///     - **Description**: Creates a new report from a `NewReport` JSON payload.
///       `name` and `date` are required; `summary` and `plan` default to empty.
///
/// *   **`GET /defaults`**:
///     - **Handler**: `defaults::process`
///     - **Description**: Suggests prefill values for a new report form: the
///       name on the most recent report and today's date.
///
/// *   **`GET /{report_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Retrieves a single report by its id.
///
/// *   **`POST /{report_id}/update`**:
///     - **Handler**: `update::process`
///     - **Description**: Applies a partial update. Only the fields present in
///       the `ReportPatch` payload are overwritten; supplied fields are
///       validated the same way as on create.
///
/// *   **`POST /{report_id}/delete`**:
///     - **Handler**: `delete::process`
///     - **Description**: Removes the report permanently.
///
/// *   **`GET /{report_id}/export/{template_id}`**:
///     - **Handler**: `export::process`
///     - **Description**: Renders the report into the stored template and
///       returns the generated document as a `.docx` attachment.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/defaults", get().to(defaults::process))
        .route("/{report_id}", get().to(get::process))
        .route("/{report_id}/update", post().to(update::process))
        .route("/{report_id}/delete", post().to(delete::process))
        .route(
            "/{report_id}/export/{template_id}",
            get().to(export::process),
        )
}

/// Check that the author name is present.
pub(crate) fn validate_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

/// Check that a report date is present and well-formed (`YYYY-MM-DD`).
pub(crate) fn validate_date(date: &str) -> Result<(), Error> {
    if date.trim().is_empty() {
        return Err(Error::Validation("date must not be empty".to_string()));
    }
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| Error::Validation(format!("date must be YYYY-MM-DD, got '{date}'")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_date_passes() {
        assert!(validate_date("2024-01-31").is_ok());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for date in ["", "  ", "2024-1-1x", "31-01-2024", "2024-13-01", "next week"] {
            let err = validate_date(date).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "accepted '{date}'");
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(validate_name(""), Err(Error::Validation(_))));
        assert!(matches!(validate_name("   "), Err(Error::Validation(_))));
        assert!(validate_name("Alice").is_ok());
    }
}
