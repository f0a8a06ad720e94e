use crate::error::CmsError;
use crate::middleware::{AuthUser, ValidJson};
use crate::server::router::CmsState;
use crate::service::sections;
use crate::types::portfolio::Portfolio;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::info;

/// GET /api/portfolio
pub async fn get_portfolio(State(state): State<CmsState>) -> Result<Json<Portfolio>, CmsError> {
    Ok(Json(sections::portfolio(&state.store).await?))
}

/// PUT /api/portfolio
pub async fn put_portfolio(
    State(state): State<CmsState>,
    AuthUser(user): AuthUser,
    ValidJson(body): ValidJson<Portfolio>,
) -> Result<Json<Value>, CmsError> {
    let data = sections::replace_portfolio(&state.store, body).await?;
    info!(user = %user.id, projects = data.projects.len(), "portfolio updated");
    Ok(Json(json!({
        "message": "Portfolio updated successfully",
        "data": data,
    })))
}
