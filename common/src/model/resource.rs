use serde::{Deserialize, Serialize};

/// A catalog entry describing a subject/unit/topic combination, optionally with an
/// attached PDF document.
///
/// The JSON shape follows the resource store: the identifier travels as `_id` and
/// the document location as `pdfPath`. Any additional fields the store sends
/// (timestamps, revision counters) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Opaque identifier assigned by the store. Never changes after creation.
    #[serde(rename = "_id")]
    pub id: String,
    pub subject_name: String,
    pub unit_name: String,
    pub topic: String,
    /// Free-form notes. `None` and `Some("")` both mean "nothing to show".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    /// Absolute URL or root-relative path of the attached document, if any.
    #[serde(default, rename = "pdfPath", skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
}

impl Resource {
    /// Extra information worth rendering, skipping empty strings.
    pub fn extra_info(&self) -> Option<&str> {
        self.extra_info.as_deref().filter(|info| !info.is_empty())
    }

    /// The attached document path, skipping empty strings.
    pub fn document_path(&self) -> Option<&str> {
        self.document_path.as_deref().filter(|path| !path.is_empty())
    }

    pub fn has_document(&self) -> bool {
        self.document_path().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_store_payload_and_ignores_unknown_fields() {
        let json = r#"{
            "_id": "65f1c2",
            "subjectName": "Math",
            "unitName": "Algebra",
            "topic": "Quadratics",
            "extraInfo": "Bring a calculator",
            "pdfPath": "/uploads/quadratics.pdf",
            "createdAt": "2024-03-13T10:00:00Z",
            "__v": 0
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();

        assert_eq!(
            resource,
            Resource {
                id: "65f1c2".to_string(),
                subject_name: "Math".to_string(),
                unit_name: "Algebra".to_string(),
                topic: "Quadratics".to_string(),
                extra_info: Some("Bring a calculator".to_string()),
                document_path: Some("/uploads/quadratics.pdf".to_string()),
            }
        );
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let json = r#"{"_id":"1","subjectName":"Math","unitName":"Algebra","topic":"Quadratics"}"#;

        let resource: Resource = serde_json::from_str(json).unwrap();

        assert_eq!(resource.extra_info(), None);
        assert!(!resource.has_document());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let json = r#"{"_id":"1","subjectName":"Math","unitName":"Algebra","topic":"Quadratics","extraInfo":"","pdfPath":""}"#;

        let resource: Resource = serde_json::from_str(json).unwrap();

        assert_eq!(resource.extra_info(), None);
        assert_eq!(resource.document_path(), None);
    }

    #[test]
    fn serializes_with_store_field_names() {
        let resource = Resource {
            id: "abc".to_string(),
            subject_name: "Physics".to_string(),
            unit_name: "Mechanics".to_string(),
            topic: "Momentum".to_string(),
            extra_info: None,
            document_path: Some("/uploads/a.pdf".to_string()),
        };

        let value = serde_json::to_value(&resource).unwrap();

        assert_eq!(value["_id"], "abc");
        assert_eq!(value["subjectName"], "Physics");
        assert_eq!(value["pdfPath"], "/uploads/a.pdf");
        assert!(value.get("extraInfo").is_none());
    }
}
