use crate::error::CmsError;
use crate::server::router::CmsState;
use crate::service::users;
use crate::types::user::User;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use headers::Authorization;
use headers::authorization::Bearer;
use tracing::debug;

/// The caller behind a valid bearer token.
///
/// Missing or invalid tokens, deleted users and inactive users are all
/// rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<CmsState> for AuthUser {
    type Rejection = CmsError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &CmsState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| CmsError::Unauthorized("No token, authorization denied".into()))?;

        let claims = state.tokens.verify(bearer.token())?;
        let user = users::find_by_id(&state.store, &claims.sub)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| {
                debug!(sub = %claims.sub, "token subject unknown or inactive");
                CmsError::Unauthorized("Token is not valid".into())
            })?;
        Ok(Self(user))
    }
}

/// An [`AuthUser`] holding the admin role; editors get 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequestParts<CmsState> for AdminUser {
    type Rejection = CmsError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &CmsState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(CmsError::Forbidden);
        }
        Ok(Self(user))
    }
}
