use crate::error::CmsError;
use crate::middleware::{AdminUser, AuthUser, JsonBody, ValidJson};
use crate::server::router::CmsState;
use crate::service::pages;
use crate::types::page::{ContentBlocksInput, PageInput};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::info;

/// GET /api/pages
pub async fn list_pages(
    State(state): State<CmsState>,
    _user: AuthUser,
) -> Result<Json<Value>, CmsError> {
    let pages = pages::list(&state.store).await?;
    Ok(Json(json!({ "pages": pages })))
}

/// GET /api/pages/{id}
pub async fn get_page(
    State(state): State<CmsState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, CmsError> {
    let page = pages::get(&state.store, &id).await?;
    Ok(Json(json!({ "page": page })))
}

/// POST /api/pages
pub async fn create_page(
    State(state): State<CmsState>,
    AuthUser(user): AuthUser,
    ValidJson(input): ValidJson<PageInput>,
) -> Result<(StatusCode, Json<Value>), CmsError> {
    let page = pages::create(&state.store, input, &user.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Page created successfully", "page": page })),
    ))
}

/// PUT /api/pages/{id}
pub async fn update_page(
    State(state): State<CmsState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<PageInput>,
) -> Result<Json<Value>, CmsError> {
    let page = pages::update(&state.store, &id, input, &user.id).await?;
    Ok(Json(json!({ "message": "Page updated successfully", "page": page })))
}

/// DELETE /api/pages/{id}
pub async fn delete_page(
    State(state): State<CmsState>,
    AdminUser(user): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, CmsError> {
    pages::delete(&state.store, &id).await?;
    info!(id = %id, user = %user.id, "page deleted");
    Ok(Json(json!({ "message": "Page deleted successfully" })))
}

/// POST /api/pages/{id}/content
pub async fn set_content(
    State(state): State<CmsState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<ContentBlocksInput>,
) -> Result<Json<Value>, CmsError> {
    let blocks = body.into_blocks()?;
    let page =
        pages::set_blocks(&state.store, &state.config.public_dir, &id, blocks, &user.id).await?;
    Ok(Json(json!({ "message": "Page content updated successfully", "page": page })))
}

/// POST /api/pages/scan/html
pub async fn scan_html(
    State(state): State<CmsState>,
    AdminUser(user): AdminUser,
) -> Result<Json<Value>, CmsError> {
    let created = pages::scan_html(&state.store, &user.id).await?;
    info!(created = created.len(), "scanned site pages");
    Ok(Json(json!({
        "message": format!("Scanned HTML files. Created {} new pages.", created.len()),
        "createdPages": created,
    })))
}
