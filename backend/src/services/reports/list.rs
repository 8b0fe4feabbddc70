use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let reports = state.store.list_reports()?;
    Ok(HttpResponse::Ok().json(reports))
}
