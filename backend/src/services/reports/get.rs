use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

/// Handler for `GET /api/reports/{report_id}`.
///
/// Returns the report as JSON, or `404 Not Found` if the id was never
/// created or has been deleted.
pub async fn process(
    state: web::Data<AppState>,
    report_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let report = state.store.get_report(report_id.into_inner())?;
    Ok(HttpResponse::Ok().json(report))
}
