use crate::error::CmsError;

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_file_size: usize,
    pub max_files: usize,
}

/// A file accepted by an upload request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    pub url: String,
    pub mimetype: String,
}

/// A file already present in the uploads directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub filename: String,
    pub size: u64,
    pub url: String,
    pub upload_date: DateTime<Utc>,
}

fn multipart_error(e: MultipartError) -> CmsError {
    CmsError::Upload(e.body_text())
}

/// `.ext` of the client file name, kept only when it is short and plain.
fn extension(original: &str) -> String {
    Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 10 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}

fn stored_name(field: &str, original: &str) -> String {
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    format!(
        "{field}-{}-{suffix}{}",
        Utc::now().timestamp_millis(),
        extension(original)
    )
}

/// Stream every part named `field` into `dir`.
///
/// Parts must carry an `image/*` content type and stay within the size
/// limit. On any error the files written so far by this request are
/// removed again. A request without matching parts yields an empty list.
pub async fn save_images(
    dir: &Path,
    multipart: &mut Multipart,
    field: &str,
    limits: UploadLimits,
) -> Result<Vec<UploadedFile>, CmsError> {
    tokio::fs::create_dir_all(dir).await?;
    let mut saved: Vec<UploadedFile> = Vec::new();
    if let Err(err) = collect(dir, multipart, field, limits, &mut saved).await {
        for file in &saved {
            if let Err(e) = tokio::fs::remove_file(dir.join(&file.filename)).await {
                warn!(file = %file.filename, error = %e, "failed to remove partial upload");
            }
        }
        return Err(err);
    }
    Ok(saved)
}

async fn collect(
    dir: &Path,
    multipart: &mut Multipart,
    field: &str,
    limits: UploadLimits,
    saved: &mut Vec<UploadedFile>,
) -> Result<(), CmsError> {
    while let Some(part) = multipart.next_field().await.map_err(multipart_error)? {
        if part.name() != Some(field) {
            return Err(CmsError::Upload("Unexpected field".into()));
        }
        if saved.len() >= limits.max_files {
            return Err(CmsError::Upload("Too many files".into()));
        }
        let mimetype = part.content_type().unwrap_or_default().to_string();
        if !mimetype.starts_with("image/") {
            return Err(CmsError::Upload("Only image files are allowed".into()));
        }
        let original_name = part.file_name().unwrap_or_default().to_string();
        let filename = stored_name(field, &original_name);
        let path = dir.join(&filename);

        let size = match write_part(&path, part, limits.max_file_size).await {
            Ok(size) => size,
            Err(e) => {
                if let Err(rm) = tokio::fs::remove_file(&path).await {
                    warn!(file = %filename, error = %rm, "failed to remove partial upload");
                }
                return Err(e);
            }
        };
        debug!(file = %filename, size, "upload stored");
        saved.push(UploadedFile {
            url: format!("/uploads/{filename}"),
            filename,
            original_name,
            size,
            mimetype,
        });
    }
    Ok(())
}

async fn write_part(path: &Path, mut part: Field<'_>, max: usize) -> Result<u64, CmsError> {
    let mut out = tokio::fs::File::create(path).await?;
    let mut size: usize = 0;
    while let Some(chunk) = part.chunk().await.map_err(multipart_error)? {
        size += chunk.len();
        if size > max {
            return Err(CmsError::Upload("File too large".into()));
        }
        out.write_all(&chunk).await?;
    }
    out.flush().await?;
    Ok(size as u64)
}

/// A bare file name inside the uploads directory, or a 400.
pub fn checked_filename(name: &str) -> Result<&str, CmsError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(CmsError::Validation("Invalid filename".into()));
    }
    Ok(name)
}

pub async fn delete(dir: &Path, filename: &str) -> Result<(), CmsError> {
    let path = dir.join(checked_filename(filename)?);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CmsError::NotFound("File not found".into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Files in the uploads directory, by name. A missing directory lists as
/// empty.
pub async fn list(dir: &Path) -> Result<Vec<StoredFile>, CmsError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let meta = entry.metadata().await?;
        if !meta.is_file() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        let stamp = meta.created().or_else(|_| meta.modified())?;
        files.push(StoredFile {
            url: format!("/uploads/{filename}"),
            filename,
            size: meta.len(),
            upload_date: DateTime::<Utc>::from(stamp),
        });
    }
    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(files)
}
