use crate::error::CmsError;
use crate::types::Validate;
use crate::types::page::require_non_empty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `verticals.json`, also the body of `PUT /api/verticals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verticals {
    pub sections: Vec<Vertical>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertical {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
}

impl Validate for Verticals {
    fn validate(&self) -> Result<(), CmsError> {
        for (i, v) in self.sections.iter().enumerate() {
            require_non_empty(&format!("sections[{i}].id"), &v.id)?;
            require_non_empty(&format!("sections[{i}].title"), &v.title)?;
            require_non_empty(
                &format!("sections[{i}].shortDescription"),
                &v.short_description,
            )?;
            require_non_empty(
                &format!("sections[{i}].longDescription"),
                &v.long_description,
            )?;
        }
        Ok(())
    }
}
