//! # Report Export Service
//!
//! This module is responsible for producing a filled Word document from
//! a stored report and an uploaded template. It provides the backend
//! logic for the `GET /api/reports/{report_id}/export/{template_id}`
//! endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: The `process` function receives the report id
//!     and template id from the URL path.
//!
//! 2.  **Data Fetching**: The report row and the template metadata are
//!     loaded from the store; a missing id on either side answers
//!     `404 Not Found`. The template bytes are then read from the data
//!     directory.
//!
//! 3.  **Rendering**: `docx::render` substitutes the placeholder tokens
//!     (`{{NAME}}`, `{{DATE}}`, `{{SUMMARY}}`, `{{PLAN}}`) with the
//!     report's field values. A template that does not parse as a docx
//!     archive answers `422 Unprocessable Entity`.
//!
//! 4.  **Output**: The generated document is named from the configured
//!     filename pattern, written into the data directory, and returned
//!     to the client as a `.docx` attachment.

use std::fs;

use actix_web::{web, HttpResponse};
use common::model::report::Report;
use log::info;

use crate::docx;
use crate::error::Error;
use crate::services::templates::stored_file_path;
use crate::state::AppState;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<(i64, String)>,
) -> Result<HttpResponse, Error> {
    let (report_id, template_id) = path.into_inner();
    let report = state.store.get_report(report_id)?;
    let meta = state.store.get_template(&template_id)?;

    let template_path = stored_file_path(&state.data_dir, &meta);
    let template_bytes = fs::read(&template_path).map_err(|e| {
        // A metadata row whose file disappeared behaves like a missing
        // template, not a storage fault.
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound("template")
        } else {
            Error::Io(e)
        }
    })?;

    let rendered = docx::render(&template_bytes, &report)?;

    let config = state.store.export_config()?;
    let filename = export_filename(&config.filename_pattern, &report);
    let output_path = state.data_dir.join(&filename);
    fs::write(&output_path, &rendered)?;
    info!("exported report {} to {}", report.id, output_path.display());

    Ok(HttpResponse::Ok()
        .content_type(DOCX_MIME)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(rendered))
}

/// Build the output filename from the configured pattern, substituting
/// the literal `{NAME}` and `{DATE}` markers and neutralizing characters
/// that would escape the data directory or break the attachment header.
fn export_filename(pattern: &str, report: &Report) -> String {
    pattern
        .replace("{NAME}", &report.name)
        .replace("{DATE}", &report.date)
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '"' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_named(name: &str) -> Report {
        Report {
            id: 1,
            name: name.to_string(),
            date: "2024-01-01".to_string(),
            summary: String::new(),
            plan: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn pattern_markers_are_substituted() {
        let filename = export_filename("{DATE}_{NAME}_weekly_report.docx", &report_named("Alice"));
        assert_eq!(filename, "2024-01-01_Alice_weekly_report.docx");
    }

    #[test]
    fn pattern_without_markers_is_kept() {
        let filename = export_filename("report.docx", &report_named("Alice"));
        assert_eq!(filename, "report.docx");
    }

    #[test]
    fn separator_characters_are_neutralized() {
        let filename = export_filename("{NAME}.docx", &report_named("a/b\\c:d\"e"));
        assert_eq!(filename, "a_b_c_d_e.docx");
    }
}
