use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let templates = state.store.list_templates()?;
    Ok(HttpResponse::Ok().json(templates))
}
