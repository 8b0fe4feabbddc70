use actix_web::{web, HttpResponse};
use common::requests::ReportPatch;

use crate::error::Error;
use crate::state::AppState;

use super::{validate_date, validate_name};

/// Handler for `POST /api/reports/{report_id}/update`.
///
/// Applies a partial update: only the fields present in the payload are
/// overwritten. Supplied fields are validated the same way as on create.
pub async fn process(
    state: web::Data<AppState>,
    report_id: web::Path<i64>,
    payload: web::Json<ReportPatch>,
) -> Result<HttpResponse, Error> {
    let mut patch = payload.into_inner();
    if let Some(name) = patch.name.as_mut() {
        validate_name(name)?;
        *name = name.trim().to_string();
    }
    if let Some(date) = patch.date.as_deref() {
        validate_date(date)?;
    }

    let report = state.store.update_report(report_id.into_inner(), &patch)?;
    Ok(HttpResponse::Ok().json(report))
}
