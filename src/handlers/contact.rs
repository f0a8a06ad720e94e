use crate::error::CmsError;
use crate::middleware::{AuthUser, ValidJson};
use crate::server::router::CmsState;
use crate::service::sections;
use crate::types::contact::Contact;

use axum::Json;
use axum::extract::State;

/// GET /api/contact
pub async fn get_contact(State(state): State<CmsState>) -> Result<Json<Contact>, CmsError> {
    Ok(Json(sections::contact(&state.store).await?))
}

/// PUT /api/contact
///
/// Responds with the stored document itself.
pub async fn put_contact(
    State(state): State<CmsState>,
    _user: AuthUser,
    ValidJson(body): ValidJson<Contact>,
) -> Result<Json<Contact>, CmsError> {
    Ok(Json(sections::replace_contact(&state.store, body).await?))
}
