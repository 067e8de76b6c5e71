use serde::{Deserialize, Serialize};

/// Multipart field names shared by the admin forms and the store's parser.
pub mod fields {
    pub const SUBJECT_NAME: &str = "subjectName";
    pub const UNIT_NAME: &str = "unitName";
    pub const TOPIC: &str = "topic";
    pub const EXTRA_INFO: &str = "extraInfo";
    pub const SECRET_CODE: &str = "secretCode";
    /// The optional document part. Only PDF files are accepted.
    pub const PDF: &str = "pdf";
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Request payload for `DELETE /api/resources/{id}`.
/// Carries the admin secret code that authorizes the deletion.
pub struct DeleteResourceRequest {
    pub secret_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_request_uses_camel_case() {
        let body = DeleteResourceRequest {
            secret_code: "s3cret".to_string(),
        };

        let json = serde_json::to_string(&body).unwrap();

        assert_eq!(json, r#"{"secretCode":"s3cret"}"#);
    }
}
