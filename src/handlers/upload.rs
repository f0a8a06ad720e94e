use crate::error::CmsError;
use crate::middleware::AuthUser;
use crate::server::router::CmsState;
use crate::service::uploads::{self, UploadLimits};

use axum::Json;
use axum::extract::{Multipart, Path, State};
use serde_json::{Value, json};
use tracing::info;

/// POST /api/upload/image, one part named `file`.
pub async fn upload_image(
    State(state): State<CmsState>,
    _user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<Value>, CmsError> {
    let limits = UploadLimits {
        max_file_size: state.config.max_file_size,
        max_files: 1,
    };
    let mut saved =
        uploads::save_images(&state.config.uploads_dir, &mut multipart, "file", limits).await?;
    let Some(file) = saved.pop() else {
        return Err(CmsError::Upload("No file uploaded".into()));
    };
    info!(file = %file.filename, size = file.size, "image uploaded");
    Ok(Json(json!({
        "success": true,
        "message": "File uploaded successfully",
        "filePath": format!("uploads/{}", file.filename),
        "file": file,
    })))
}

/// POST /api/upload/multiple, parts named `images`.
pub async fn upload_multiple(
    State(state): State<CmsState>,
    _user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<Value>, CmsError> {
    let limits = UploadLimits {
        max_file_size: state.config.max_file_size,
        max_files: state.config.max_files,
    };
    let files =
        uploads::save_images(&state.config.uploads_dir, &mut multipart, "images", limits).await?;
    if files.is_empty() {
        return Err(CmsError::Upload("No files uploaded".into()));
    }
    info!(count = files.len(), "images uploaded");
    Ok(Json(json!({
        "message": format!("{} files uploaded successfully", files.len()),
        "files": files,
    })))
}

/// DELETE /api/upload/{filename}
pub async fn delete_upload(
    State(state): State<CmsState>,
    _user: AuthUser,
    Path(filename): Path<String>,
) -> Result<Json<Value>, CmsError> {
    uploads::delete(&state.config.uploads_dir, &filename).await?;
    info!(file = %filename, "upload deleted");
    Ok(Json(json!({ "message": "File deleted successfully" })))
}

/// GET /api/upload/list
pub async fn list_uploads(
    State(state): State<CmsState>,
    _user: AuthUser,
) -> Result<Json<Value>, CmsError> {
    let files = uploads::list(&state.config.uploads_dir).await?;
    Ok(Json(json!({ "files": files })))
}
