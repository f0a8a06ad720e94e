use crate::db::document::Document;
use crate::error::CmsError;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

pub fn document_path(dir: &Path, doc: Document) -> PathBuf {
    dir.join(doc.file_name())
}

/// Read and parse a whole document.
///
/// A missing file is created with the document defaults. A file that no
/// longer parses yields the defaults without touching the file.
pub async fn load(dir: &Path, doc: Document) -> Result<Value, CmsError> {
    let path = document_path(dir, doc);
    let raw = match fs::read(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let value = doc.default_value();
            write_atomic(dir, doc, &value).await?;
            info!(path = %path.display(), "created document with defaults");
            return Ok(value);
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_slice(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "document unreadable; using defaults");
            Ok(doc.default_value())
        }
    }
}

/// Replace the whole document: write to a sibling temp file, then rename.
pub async fn write_atomic(dir: &Path, doc: Document, value: &Value) -> Result<(), CmsError> {
    let path = document_path(dir, doc);
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(&tmp, bytes).await?;
    fs::rename(&tmp, &path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let value = load(dir.path(), Document::Verticals).await.unwrap();
        assert_eq!(value["sections"].as_array().map(Vec::len), Some(4));
        assert!(dir.path().join("verticals.json").exists());
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_defaults_and_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        std::fs::write(&path, "{ not json").unwrap();
        let value = load(dir.path(), Document::Pages).await.unwrap();
        assert_eq!(value, json!([]));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        write_atomic(dir.path(), Document::Users, &json!([{"id": "1"}]))
            .await
            .unwrap();
        assert!(!dir.path().join("users.json.tmp").exists());
        let back = load(dir.path(), Document::Users).await.unwrap();
        assert_eq!(back, json!([{"id": "1"}]));
    }
}
