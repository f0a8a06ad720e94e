use crate::error::CmsError;
use crate::middleware::{AuthUser, ValidJson};
use crate::server::router::CmsState;
use crate::service::users;
use crate::types::Validate;
use crate::types::page::require_non_empty;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

/// Above this many tracked emails, idle limiter entries are dropped.
const LIMITER_KEYS_SOFT_CAP: usize = 10_000;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), CmsError> {
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

impl Validate for PasswordChange {
    fn validate(&self) -> Result<(), CmsError> {
        require_non_empty("currentPassword", &self.current_password)?;
        require_non_empty("newPassword", &self.new_password)
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<CmsState>,
    ValidJson(body): ValidJson<LoginRequest>,
) -> Result<Json<Value>, CmsError> {
    let key = users::normalize_email(&body.email);
    if state.login_limiter.check_key(&key).is_err() {
        warn!(email = %key, "login rate limit exceeded");
        return Err(CmsError::RateLimited);
    }
    if state.login_limiter.len() > LIMITER_KEYS_SOFT_CAP {
        state.login_limiter.retain_recent();
    }
    let user = users::authenticate(&state.store, &body.email, &body.password).await?;
    let token = state.tokens.issue(&user)?;
    info!(user = %user.id, "login");
    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
        "user": user.view(),
    })))
}

/// GET /api/auth/me
pub async fn me(AuthUser(user): AuthUser) -> Json<Value> {
    Json(json!({ "user": user.view() }))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<CmsState>,
    AuthUser(user): AuthUser,
    ValidJson(body): ValidJson<PasswordChange>,
) -> Result<Json<Value>, CmsError> {
    users::change_password(
        &state.store,
        &user.id,
        &body.current_password,
        &body.new_password,
        state.config.bcrypt_cost,
    )
    .await?;
    info!(user = %user.id, "password changed");
    Ok(Json(json!({ "message": "Password updated successfully" })))
}
