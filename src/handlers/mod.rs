pub mod about;
pub mod auth;
pub mod contact;
pub mod frontend;
pub mod homepage;
pub mod pages;
pub mod portfolio;
pub mod upload;
pub mod verticals;

use crate::error::CmsError;
use crate::server::router::CmsState;

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde_json::{Value, json};

/// GET /api/health
pub async fn health(State(state): State<CmsState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now(),
        "environment": state.config.environment,
    }))
}

/// Anything no route matched.
pub async fn not_found() -> CmsError {
    CmsError::NotFound("Route not found".into())
}
