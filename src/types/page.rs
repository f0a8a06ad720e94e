use crate::error::CmsError;
use crate::types::Validate;
use crate::types::user::default_true;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Text,
    Html,
    Image,
    Heading,
    Paragraph,
    List,
}

impl BlockType {
    /// Block kinds whose content replaces an element's text node.
    pub fn is_textual(self) -> bool {
        matches!(self, BlockType::Text | BlockType::Paragraph | BlockType::Heading)
    }
}

/// One text region of a page to override, addressed by CSS class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockType,
    pub selector: String,
    pub content: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_file: String,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
    #[serde(default = "default_true")]
    pub is_published: bool,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub modified_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/pages` and `PUT /api/pages/:id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    pub name: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_file: String,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

impl Validate for PageInput {
    fn validate(&self) -> Result<(), CmsError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("slug", &self.slug)?;
        require_non_empty("title", &self.title)?;
        require_non_empty("htmlFile", &self.html_file)?;
        check_html_file(&self.html_file)?;
        validate_blocks(&self.content_blocks)
    }
}

/// Body of `POST /api/pages/:id/content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlocksInput {
    pub content_blocks: serde_json::Value,
}

impl ContentBlocksInput {
    pub fn into_blocks(self) -> Result<Vec<ContentBlock>, CmsError> {
        if !self.content_blocks.is_array() {
            return Err(CmsError::Validation(
                "Content blocks must be an array".to_string(),
            ));
        }
        let blocks: Vec<ContentBlock> = serde_json::from_value(self.content_blocks)
            .map_err(|e| CmsError::Validation(format!("invalid content block: {e}")))?;
        validate_blocks(&blocks)?;
        Ok(blocks)
    }
}

fn validate_blocks(blocks: &[ContentBlock]) -> Result<(), CmsError> {
    for (i, block) in blocks.iter().enumerate() {
        require_non_empty(&format!("contentBlocks[{i}].selector"), &block.selector)?;
        require_non_empty(&format!("contentBlocks[{i}].content"), &block.content)?;
    }
    Ok(())
}

/// An `htmlFile` must stay inside the public directory: relative, made of
/// plain components only, with `/` as the separator.
pub fn check_html_file(relative: &str) -> Result<(), CmsError> {
    let safe = !relative.is_empty()
        && !relative.contains('\\')
        && Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !safe {
        return Err(CmsError::Validation(format!(
            "invalid HTML file path: {relative}"
        )));
    }
    Ok(())
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), CmsError> {
    if value.trim().is_empty() {
        return Err(CmsError::Validation(format!(
            "\"{field}\" is not allowed to be empty"
        )));
    }
    Ok(())
}

/// Loosely resolved `modifiedBy` reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A page as returned over HTTP, with `modifiedBy` resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    #[serde(flatten)]
    pub page: PageFields,
    pub modified_by: Option<UserRef>,
}

/// Page fields minus `modifiedBy`, for embedding in [`PageView`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFields {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub html_file: String,
    pub content_blocks: Vec<ContentBlock>,
    pub is_published: bool,
    pub last_modified: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PageView {
    pub fn new(page: Page, modified_by: Option<UserRef>) -> Self {
        Self {
            page: PageFields {
                id: page.id,
                name: page.name,
                slug: page.slug,
                title: page.title,
                description: page.description,
                html_file: page.html_file,
                content_blocks: page.content_blocks,
                is_published: page.is_published,
                last_modified: page.last_modified,
                created_at: page.created_at,
                updated_at: page.updated_at,
            },
            modified_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(v: serde_json::Value) -> PageInput {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn page_input_defaults_published() {
        let p = input(json!({
            "name": "About", "slug": "about", "title": "About", "htmlFile": "about.html"
        }));
        assert!(p.is_published);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn empty_slug_is_rejected() {
        let p = input(json!({
            "name": "About", "slug": "", "title": "About", "htmlFile": "about.html"
        }));
        let err = p.validate().unwrap_err();
        assert_eq!(err.to_string(), "\"slug\" is not allowed to be empty");
    }

    #[test]
    fn html_file_outside_public_dir_is_rejected() {
        for file in ["../escape.html", "/etc/passwd", "work\\..\\x.html"] {
            let p = input(json!({
                "name": "About", "slug": "about", "title": "About", "htmlFile": file
            }));
            assert!(
                matches!(p.validate(), Err(CmsError::Validation(m)) if m.starts_with("invalid HTML file path")),
                "{file} accepted"
            );
        }
    }

    #[test]
    fn content_blocks_must_be_an_array() {
        let body: ContentBlocksInput =
            serde_json::from_value(json!({"contentBlocks": {"a": 1}})).unwrap();
        assert!(matches!(body.into_blocks(), Err(CmsError::Validation(m)) if m == "Content blocks must be an array"));
    }

    #[test]
    fn textual_block_kinds() {
        assert!(BlockType::Heading.is_textual());
        assert!(!BlockType::Image.is_textual());
    }
}
