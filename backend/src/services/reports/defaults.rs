use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::error::Error;
use crate::state::AppState;

/// Handler for `GET /api/reports/defaults`.
///
/// Suggests prefill values for a new report form: the name on the most
/// recent report (empty if none exist) and today's date.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let name = state.store.last_report_name()?.unwrap_or_default();
    let date = Local::now().format("%Y-%m-%d").to_string();
    Ok(HttpResponse::Ok().json(serde_json::json!({ "name": name, "date": date })))
}
