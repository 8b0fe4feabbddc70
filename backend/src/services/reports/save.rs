use actix_web::{web, HttpResponse};
use common::requests::NewReport;

use crate::error::Error;
use crate::state::AppState;

use super::{validate_date, validate_name};

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<NewReport>,
) -> Result<HttpResponse, Error> {
    let mut new = payload.into_inner();
    validate_name(&new.name)?;
    validate_date(&new.date)?;
    new.name = new.name.trim().to_string();

    let report = state.store.create_report(&new)?;
    Ok(HttpResponse::Ok().json(report))
}
