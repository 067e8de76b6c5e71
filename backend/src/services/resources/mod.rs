//! # Resource Service Module
//!
//! Routes for the catalog collection under `/api/resources`.
//!
//! ## Sub-modules:
//! - `list`: returns every resource in creation order.
//! - `create`: stores a new resource from a multipart submission.
//! - `update`: replaces a resource's fields and optionally its document.
//! - `delete`: removes a resource together with its document.
//! - `submission`: multipart parsing shared by `create` and `update`.

mod create;
mod delete;
mod list;
mod submission;
mod update;

use actix_web::web::{delete, get, post, put, scope, JsonConfig};
use actix_web::Scope;
use common::api::RESOURCES_PATH;

use crate::error::ServiceError;

/// Configures the `Scope` for the resource endpoints.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`
/// *   **`POST /`**: `create::process`, multipart, answered with `201 Created`.
/// *   **`PUT /{id}`**: `update::process`, multipart full-entity update.
/// *   **`DELETE /{id}`**: `delete::process`, JSON body `{"secretCode": ...}`.
///
/// Mutations are authorized against the configured admin secret code. Malformed JSON
/// bodies are answered like every other error, with an `ApiMessage`.
pub fn configure_routes() -> Scope {
    let json_config = JsonConfig::default()
        .error_handler(|err, _req| ServiceError::BadRequest(err.to_string()).into());

    scope(RESOURCES_PATH)
        .app_data(json_config)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::store::{DocumentStore, ResourceStore};
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::api::{resource_path, ApiMessage};
    use common::model::resource::Resource;
    use common::requests::{fields, DeleteResourceRequest};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SECRET: &str = "letmein";
    const BOUNDARY: &str = "----catalog-test-boundary";

    fn state(secret: Option<&str>) -> (web::Data<AppState>, TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState::new(
            ResourceStore::in_memory().unwrap(),
            DocumentStore::new(tmp.path().join("uploads")).unwrap(),
            secret.map(str::to_string),
        );
        (web::Data::new(state), tmp)
    }

    /// Hand-built `multipart/form-data` body.
    fn multipart(texts: &[(&str, &str)], pdf: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in texts {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY, name, value
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, bytes)) = pdf {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/pdf\r\n\r\n",
                    BOUNDARY,
                    fields::PDF,
                    file_name
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn form_texts<'a>(subject: &'a str, secret: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            (fields::SUBJECT_NAME, subject),
            (fields::UNIT_NAME, "Unit 1"),
            (fields::TOPIC, "Limits"),
            (fields::EXTRA_INFO, ""),
            (fields::SECRET_CODE, secret),
        ]
    }

    fn multipart_request(req: test::TestRequest, body: Vec<u8>) -> test::TestRequest {
        req.insert_header((
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(body)
    }

    macro_rules! app {
        ($data:expr) => {
            test::init_service(App::new().app_data($data.clone()).service(configure_routes())).await
        };
    }

    #[actix_web::test]
    async fn create_then_list_without_document() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("Calculus", SECRET), None),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Resource = test::read_body_json(resp).await;
        assert_eq!(created.subject_name, "Calculus");
        assert_eq!(created.extra_info, None);
        assert!(!created.has_document());

        let req = test::TestRequest::get().uri(RESOURCES_PATH).to_request();
        let listed: Vec<Resource> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![created]);
    }

    #[actix_web::test]
    async fn wrong_secret_is_rejected() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("Calculus", "guess"), None),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ApiMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, "Invalid secret code");
        assert!(data.store.list().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn mutations_need_a_configured_secret() {
        let (data, _tmp) = state(None);
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("Calculus", ""), None),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn missing_required_field_is_named() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("", SECRET), None),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, "subjectName is required");
    }

    #[actix_web::test]
    async fn uploaded_pdf_is_stored_under_uploads() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("Calculus", SECRET), Some(("notes.pdf", &b"%PDF-1.7"[..]))),
        )
        .to_request();
        let created: Resource = test::call_and_read_body_json(&app, req).await;

        let path = created.document_path().unwrap();
        let local = data.documents.local_path(path).unwrap();
        assert_eq!(std::fs::read(local).unwrap(), b"%PDF-1.7");
    }

    #[actix_web::test]
    async fn non_pdf_upload_is_rejected() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("Calculus", SECRET), Some(("notes.docx", &b"PK"[..]))),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(data.store.list().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn update_replaces_fields_and_document() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("Calculus", SECRET), Some(("a.pdf", &b"%PDF-a"[..]))),
        )
        .to_request();
        let created: Resource = test::call_and_read_body_json(&app, req).await;
        let old_local = data
            .documents
            .local_path(created.document_path().unwrap())
            .unwrap();

        let req = multipart_request(
            test::TestRequest::put().uri(&resource_path(&created.id)),
            multipart(&form_texts("Analysis", SECRET), None),
        )
        .to_request();
        let kept: Resource = test::call_and_read_body_json(&app, req).await;
        assert_eq!(kept.subject_name, "Analysis");
        assert_eq!(kept.document_path, created.document_path);
        assert!(old_local.exists());

        let req = multipart_request(
            test::TestRequest::put().uri(&resource_path(&created.id)),
            multipart(&form_texts("Analysis", SECRET), Some(("b.pdf", &b"%PDF-b"[..]))),
        )
        .to_request();
        let replaced: Resource = test::call_and_read_body_json(&app, req).await;
        assert_ne!(replaced.document_path, created.document_path);
        assert!(!old_local.exists());
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::put().uri(&resource_path("ghost")),
            multipart(&form_texts("Calculus", SECRET), None),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ApiMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, "Resource not found");

        let req = test::TestRequest::delete()
            .uri(&resource_path("ghost"))
            .set_json(DeleteResourceRequest {
                secret_code: SECRET.to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_of_unknown_id_leaves_no_upload_behind() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::put().uri(&resource_path("ghost")),
            multipart(&form_texts("Calculus", SECRET), Some(("a.pdf", &b"%PDF-a"[..]))),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let leftovers = std::fs::read_dir(data.documents.dir()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[actix_web::test]
    async fn delete_without_secret_code_answers_with_a_message() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = test::TestRequest::delete()
            .uri(&resource_path("ghost"))
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{}")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiMessage = test::read_body_json(resp).await;
        assert!(body.message.contains("secretCode"), "{}", body.message);
    }

    #[actix_web::test]
    async fn delete_removes_record_and_document() {
        let (data, _tmp) = state(Some(SECRET));
        let app = app!(data);

        let req = multipart_request(
            test::TestRequest::post().uri(RESOURCES_PATH),
            multipart(&form_texts("Calculus", SECRET), Some(("a.pdf", &b"%PDF-a"[..]))),
        )
        .to_request();
        let created: Resource = test::call_and_read_body_json(&app, req).await;
        let local = data
            .documents
            .local_path(created.document_path().unwrap())
            .unwrap();

        let req = test::TestRequest::delete()
            .uri(&resource_path(&created.id))
            .set_json(DeleteResourceRequest {
                secret_code: "guess".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(local.exists());

        let req = test::TestRequest::delete()
            .uri(&resource_path(&created.id))
            .set_json(DeleteResourceRequest {
                secret_code: SECRET.to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert!(data.store.list().unwrap().is_empty());
        assert!(!local.exists());
    }
}
