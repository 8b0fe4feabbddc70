use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    template_id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let meta = state.store.get_template(&template_id)?;
    Ok(HttpResponse::Ok().json(meta))
}
