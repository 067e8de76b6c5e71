//! HTTP calls against the resource store.
//!
//! Each function maps the outcome onto what the workflows expect: the fetched list
//! (or a description of why it failed) for reads, `MutationError` for writes. Any 2xx
//! answer counts as success; the store's `{"message": ...}` body is picked up from
//! failed mutations when present.

use common::api::{endpoint_url, resource_path, ApiMessage, MutationError, RESOURCES_PATH};
use common::model::resource::Resource;
use common::requests::{fields, DeleteResourceRequest};
use common::workflow::{ResourceForm, SecretCode};
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// `GET /api/resources`.
pub async fn fetch_all(api_base: &str) -> Result<Vec<Resource>, String> {
    let response = Request::get(&endpoint_url(api_base, RESOURCES_PATH))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("unexpected status {}", response.status()));
    }
    response
        .json::<Vec<Resource>>()
        .await
        .map_err(|e| e.to_string())
}

/// `POST /api/resources` with every field plus the optional document.
pub async fn create(
    api_base: &str,
    form: &ResourceForm,
    document: Option<&File>,
    secret_code: &SecretCode,
) -> Result<(), MutationError> {
    let body = multipart_body(form, document, secret_code)?;
    let request = Request::post(&endpoint_url(api_base, RESOURCES_PATH))
        .body(body)
        .map_err(|e| MutationError::network(e.to_string()))?;

    settle(request.send().await).await
}

/// `PUT /api/resources/{id}`; the document part is only sent when a new file was chosen.
pub async fn update(
    api_base: &str,
    id: &str,
    form: &ResourceForm,
    document: Option<&File>,
    secret_code: &SecretCode,
) -> Result<(), MutationError> {
    let body = multipart_body(form, document, secret_code)?;
    let request = Request::put(&endpoint_url(api_base, &resource_path(id)))
        .body(body)
        .map_err(|e| MutationError::network(e.to_string()))?;

    settle(request.send().await).await
}

/// `DELETE /api/resources/{id}` with the secret code as JSON body.
pub async fn delete(api_base: &str, id: &str, secret_code: &SecretCode) -> Result<(), MutationError> {
    let body = DeleteResourceRequest {
        secret_code: secret_code.as_str().to_string(),
    };
    let request = Request::delete(&endpoint_url(api_base, &resource_path(id)))
        .json(&body)
        .map_err(|e| MutationError::network(e.to_string()))?;

    settle(request.send().await).await
}

/// Builds the multipart payload. The browser picks the boundary, so no content type
/// is set on the request.
fn multipart_body(
    form: &ResourceForm,
    document: Option<&File>,
    secret_code: &SecretCode,
) -> Result<FormData, MutationError> {
    let data = FormData::new().map_err(js_error)?;
    for (name, value) in form.wire_fields() {
        data.append_with_str(name, value).map_err(js_error)?;
    }
    data.append_with_str(fields::SECRET_CODE, secret_code.as_str())
        .map_err(js_error)?;

    if let Some(file) = document {
        data.append_with_blob_and_filename(fields::PDF, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(data)
}

async fn settle(sent: Result<Response, gloo_net::Error>) -> Result<(), MutationError> {
    let response = sent.map_err(|e| MutationError::network(e.to_string()))?;
    if response.ok() {
        return Ok(());
    }

    let message = response.json::<ApiMessage>().await.ok().map(|m| m.message);
    Err(MutationError::rejected(response.status(), message))
}

fn js_error(value: JsValue) -> MutationError {
    MutationError::network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
