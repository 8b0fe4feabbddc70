use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let config = state.store.export_config()?;
    Ok(HttpResponse::Ok().json(config))
}
