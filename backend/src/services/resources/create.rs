use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use log::info;

use super::submission::read_submission;
use crate::error::ServiceError;
use crate::state::AppState;

/// `POST /api/resources`: authorizes, validates, stores the optional document and
/// answers `201 Created` with the new record.
pub async fn process(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ServiceError> {
    let submission = read_submission(payload).await?;
    state.authorize(&submission.secret_code)?;
    submission.validate()?;

    let pdf_path = match &submission.document {
        Some(document) => {
            let path = state.documents.save(&document.bytes)?;
            info!("Stored document {} as {}", document.file_name, path);
            Some(path)
        }
        None => None,
    };

    let resource = match state.store.insert(&submission.form, pdf_path.clone()) {
        Ok(resource) => resource,
        Err(e) => {
            if let Some(path) = &pdf_path {
                state.documents.remove(path);
            }
            return Err(e);
        }
    };

    info!("Created resource {}", resource.id);
    Ok(HttpResponse::Created().json(resource))
}
