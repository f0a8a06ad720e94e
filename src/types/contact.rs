use crate::error::CmsError;
use crate::types::Validate;
use crate::types::page::require_non_empty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `contact.json`, also the body of `PUT /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub form: ContactForm,
    pub faq: Faq,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub title: String,
    pub fields: ContactFields,
    pub submit_button: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: FormField,
    pub email: FormField,
    pub company: FormField,
    pub message: FormField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub title: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    pub number: String,
    pub question: String,
    pub answer: String,
    pub column: i64,
    pub sort_order: i64,
}

impl Validate for Contact {
    fn validate(&self) -> Result<(), CmsError> {
        require_non_empty("form.title", &self.form.title)?;
        require_non_empty("form.submitButton", &self.form.submit_button)?;
        let fields = &self.form.fields;
        for (name, field) in [
            ("name", &fields.name),
            ("email", &fields.email),
            ("company", &fields.company),
            ("message", &fields.message),
        ] {
            require_non_empty(&format!("form.fields.{name}.label"), &field.label)?;
            require_non_empty(
                &format!("form.fields.{name}.placeholder"),
                &field.placeholder,
            )?;
        }

        require_non_empty("faq.title", &self.faq.title)?;
        for (i, item) in self.faq.items.iter().enumerate() {
            require_non_empty(&format!("faq.items[{i}].id"), &item.id)?;
            require_non_empty(&format!("faq.items[{i}].number"), &item.number)?;
            require_non_empty(&format!("faq.items[{i}].question"), &item.question)?;
            require_non_empty(&format!("faq.items[{i}].answer"), &item.answer)?;
            if !(1..=2).contains(&item.column) {
                return Err(CmsError::Validation(format!(
                    "\"faq.items[{i}].column\" must be 1 or 2"
                )));
            }
            if item.sort_order < 1 {
                return Err(CmsError::Validation(format!(
                    "\"faq.items[{i}].sortOrder\" must be greater than or equal to 1"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact_with_column(column: i64) -> Contact {
        let mut doc = crate::db::Document::Contact.default_value();
        doc["faq"]["items"] = json!([{
            "id": "q1", "number": "01", "question": "Why?", "answer": "Because.",
            "column": column, "sortOrder": 1
        }]);
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn faq_column_must_be_one_or_two() {
        assert!(contact_with_column(2).validate().is_ok());
        assert!(contact_with_column(3).validate().is_err());
    }
}
