use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    report_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    state.store.delete_report(report_id.into_inner())?;
    Ok(HttpResponse::Ok().body("Report deleted"))
}
