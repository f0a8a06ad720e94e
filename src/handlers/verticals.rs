use crate::error::CmsError;
use crate::middleware::{AuthUser, ValidJson};
use crate::server::router::CmsState;
use crate::service::sections;
use crate::types::verticals::Verticals;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

/// GET /api/verticals
pub async fn get_verticals(State(state): State<CmsState>) -> Result<Json<Verticals>, CmsError> {
    Ok(Json(sections::verticals(&state.store).await?))
}

/// PUT /api/verticals
pub async fn put_verticals(
    State(state): State<CmsState>,
    _user: AuthUser,
    ValidJson(body): ValidJson<Verticals>,
) -> Result<Json<Value>, CmsError> {
    let data = sections::replace_verticals(&state.store, body).await?;
    Ok(Json(json!({
        "message": "Verticals updated successfully",
        "data": data,
    })))
}
