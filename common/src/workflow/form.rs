//! Editable-field buffer shared by the add form and the edit surface.

use crate::model::resource::Resource;
use crate::requests::fields;

/// One of the editable text fields of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SubjectName,
    UnitName,
    Topic,
    ExtraInfo,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::SubjectName,
        FormField::UnitName,
        FormField::Topic,
        FormField::ExtraInfo,
    ];

    /// Multipart field name understood by the store.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::SubjectName => fields::SUBJECT_NAME,
            FormField::UnitName => fields::UNIT_NAME,
            FormField::Topic => fields::TOPIC,
            FormField::ExtraInfo => fields::EXTRA_INFO,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::SubjectName => "Subject Name",
            FormField::UnitName => "Unit Name",
            FormField::Topic => "Topic",
            FormField::ExtraInfo => "Extra Information",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::ExtraInfo)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceForm {
    pub subject_name: String,
    pub unit_name: String,
    pub topic: String,
    pub extra_info: String,
}

impl ResourceForm {
    /// Seeds the buffer from a listed resource. Missing extra information becomes `""`.
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            subject_name: resource.subject_name.clone(),
            unit_name: resource.unit_name.clone(),
            topic: resource.topic.clone(),
            extra_info: resource.extra_info.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SubjectName => &self.subject_name,
            FormField::UnitName => &self.unit_name,
            FormField::Topic => &self.topic,
            FormField::ExtraInfo => &self.extra_info,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::SubjectName => self.subject_name = value,
            FormField::UnitName => self.unit_name = value,
            FormField::Topic => self.topic = value,
            FormField::ExtraInfo => self.extra_info = value,
        }
    }

    /// First required field left empty, in form order.
    pub fn missing_required(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.get(*field).is_empty())
    }

    /// `(multipart name, value)` pairs for every editable field, extra info included.
    pub fn wire_fields(&self) -> [(&'static str, &str); 4] {
        FormField::ALL.map(|field| (field.wire_name(), self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeding_from_resource_without_extra_info_gives_empty_string() {
        let resource = Resource {
            id: "7".to_string(),
            subject_name: "Math".to_string(),
            unit_name: "Algebra".to_string(),
            topic: "Quadratics".to_string(),
            extra_info: None,
            document_path: None,
        };

        let form = ResourceForm::from_resource(&resource);

        assert_eq!(form.extra_info, "");
        assert_eq!(form.subject_name, "Math");
    }

    #[test]
    fn missing_required_reports_fields_in_order_and_ignores_extra_info() {
        let mut form = ResourceForm::default();
        assert_eq!(form.missing_required(), Some(FormField::SubjectName));

        form.set(FormField::SubjectName, "Math".to_string());
        assert_eq!(form.missing_required(), Some(FormField::UnitName));

        form.set(FormField::UnitName, "Algebra".to_string());
        form.set(FormField::Topic, "Quadratics".to_string());
        assert_eq!(form.missing_required(), None);
    }

    #[test]
    fn wire_fields_use_store_names() {
        let form = ResourceForm {
            subject_name: "Math".to_string(),
            unit_name: "Algebra".to_string(),
            topic: "Quadratics".to_string(),
            extra_info: String::new(),
        };

        assert_eq!(
            form.wire_fields(),
            [
                ("subjectName", "Math"),
                ("unitName", "Algebra"),
                ("topic", "Quadratics"),
                ("extraInfo", ""),
            ]
        );
    }
}
