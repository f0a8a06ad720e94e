use crate::error::CmsError;
use crate::types::Validate;
use crate::types::page::require_non_empty;
use crate::types::user::default_true;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `portfolio.json`, also the body of `PUT /api/portfolio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub hero: PortfolioHero,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHero {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

impl Validate for Portfolio {
    fn validate(&self) -> Result<(), CmsError> {
        require_non_empty("hero.title", &self.hero.title)?;
        require_non_empty("hero.description", &self.hero.description)?;
        for (i, p) in self.projects.iter().enumerate() {
            require_non_empty(&format!("projects[{i}].id"), &p.id)?;
            require_non_empty(&format!("projects[{i}].title"), &p.title)?;
            require_non_empty(&format!("projects[{i}].category"), &p.category)?;
            require_non_empty(&format!("projects[{i}].url"), &p.url)?;
            if matches!(p.sort_order, Some(n) if n < 1) {
                return Err(CmsError::Validation(format!(
                    "\"projects[{i}].sortOrder\" must be greater than or equal to 1"
                )));
            }
        }
        Ok(())
    }
}
