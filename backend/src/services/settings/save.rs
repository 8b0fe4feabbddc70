use actix_web::{web, HttpResponse};
use common::requests::SaveSettingsRequest;

use crate::error::Error;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<SaveSettingsRequest>,
) -> Result<HttpResponse, Error> {
    let pattern = payload.filename_pattern.trim();
    if pattern.is_empty() {
        return Err(Error::Validation(
            "filename pattern must not be empty".to_string(),
        ));
    }

    let config = state.store.set_filename_pattern(pattern)?;
    Ok(HttpResponse::Ok().json(config))
}
