use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use log::info;

use super::submission::read_submission;
use crate::error::ServiceError;
use crate::state::AppState;

/// `PUT /api/resources/{id}`: full-entity update. A new `pdf` part replaces the stored
/// document (and deletes the old file); without one the document is kept.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let submission = read_submission(payload).await?;
    state.authorize(&submission.secret_code)?;
    submission.validate()?;

    let new_path = match &submission.document {
        Some(document) => Some(state.documents.save(&document.bytes)?),
        None => None,
    };

    let updated = match state.store.update(&id, &submission.form, new_path.clone()) {
        Ok(Some(updated)) => updated,
        outcome => {
            if let Some(path) = &new_path {
                state.documents.remove(path);
            }
            return Err(outcome.err().unwrap_or(ServiceError::NotFound));
        }
    };

    if let Some(old) = &updated.replaced_document {
        state.documents.remove(old);
    }

    info!("Updated resource {}", id);
    Ok(HttpResponse::Ok().json(updated.resource))
}
