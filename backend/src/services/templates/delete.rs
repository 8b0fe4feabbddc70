use std::fs;

use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

use super::stored_file_path;

/// Handler for `POST /api/templates/{template_id}/delete`.
///
/// Removes the metadata row first, then the stored file. A file that is
/// already gone is not an error; the metadata row is authoritative.
pub async fn process(
    state: web::Data<AppState>,
    template_id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let meta = state.store.delete_template(&template_id)?;

    let path = stored_file_path(&state.data_dir, &meta);
    if let Err(e) = fs::remove_file(&path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            return Err(Error::Io(e));
        }
    }

    Ok(HttpResponse::Ok().body("Template deleted"))
}
