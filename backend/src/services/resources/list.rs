use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::state::AppState;

/// `GET /api/resources`: the whole collection, oldest first.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let resources = state.store.list()?;
    Ok(HttpResponse::Ok().json(resources))
}
