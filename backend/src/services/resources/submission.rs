//! Parsing of the multipart body shared by create and update.
//!
//! Text parts are matched by name against `common::requests::fields`; unknown parts
//! are drained and ignored. The `pdf` part must carry a `.pdf` file name and is kept
//! in memory up to [`MAX_DOCUMENT_BYTES`]. An empty file part counts as "no document".

use actix_multipart::{Field, Multipart};
use common::requests::fields;
use common::workflow::{FormField, ResourceForm};
use futures_util::StreamExt;

use crate::error::ServiceError;

pub const MAX_DOCUMENT_BYTES: usize = 20 * 1024 * 1024;

/// Longest accepted text field, secret code included.
const MAX_TEXT_BYTES: usize = 64 * 1024;

pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct Submission {
    pub form: ResourceForm,
    pub secret_code: String,
    pub document: Option<UploadedDocument>,
}

impl Submission {
    /// Rejects submissions with an empty required field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        match self.form.missing_required() {
            Some(field) => Err(ServiceError::MissingField(field.wire_name())),
            None => Ok(()),
        }
    }
}

pub async fn read_submission(mut payload: Multipart) -> Result<Submission, ServiceError> {
    let mut form = ResourceForm::default();
    let mut secret_code = String::new();
    let mut document = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()))
            .unwrap_or_default();

        if name == fields::PDF {
            document = read_document(&mut field).await?;
        } else if name == fields::SECRET_CODE {
            secret_code = read_text(&mut field).await?;
        } else if let Some(form_field) = FormField::ALL.into_iter().find(|f| f.wire_name() == name) {
            let value = read_text(&mut field).await?;
            form.set(form_field, value);
        } else {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
        }
    }

    Ok(Submission {
        form,
        secret_code,
        document,
    })
}

async fn read_text(field: &mut Field) -> Result<String, ServiceError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
        if bytes.len() > MAX_TEXT_BYTES {
            return Err(ServiceError::BadRequest("Text field is too long".to_string()));
        }
    }
    String::from_utf8(bytes)
        .map_err(|_| ServiceError::BadRequest("Text fields must be valid UTF-8".to_string()))
}

async fn read_document(field: &mut Field) -> Result<Option<UploadedDocument>, ServiceError> {
    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
        .unwrap_or_default();

    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
        if bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(ServiceError::DocumentTooLarge(MAX_DOCUMENT_BYTES));
        }
    }

    if bytes.is_empty() {
        return Ok(None);
    }
    if !file_name.to_lowercase().ends_with(".pdf") {
        return Err(ServiceError::BadRequest(
            "Only PDF documents are accepted".to_string(),
        ));
    }
    Ok(Some(UploadedDocument { file_name, bytes }))
}
