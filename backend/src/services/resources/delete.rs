use actix_web::{web, HttpResponse};
use common::api::ApiMessage;
use common::requests::DeleteResourceRequest;
use log::info;

use crate::error::ServiceError;
use crate::state::AppState;

/// `DELETE /api/resources/{id}` with `{"secretCode": ...}`; also removes the document.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<DeleteResourceRequest>,
) -> Result<HttpResponse, ServiceError> {
    state.authorize(&body.secret_code)?;

    let removed = state.store.delete(&id)?.ok_or(ServiceError::NotFound)?;
    if let Some(path) = removed.document_path() {
        state.documents.remove(path);
    }

    info!("Deleted resource {}", removed.id);
    Ok(HttpResponse::Ok().json(ApiMessage::new("Resource deleted successfully")))
}
