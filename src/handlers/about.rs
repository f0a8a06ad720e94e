use crate::error::CmsError;
use crate::middleware::{AuthUser, JsonBody};
use crate::server::router::CmsState;
use crate::service::sections::{self, update_about_section};
use crate::types::about::{AboutContent, AboutHero, AboutTeam, Gallery, Quote, Story, StoryIntro};

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::{Value, json};

fn updated(data: impl Serialize, section: &str) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data,
        "message": format!("{section} section updated successfully"),
    }))
}

/// GET /api/about
pub async fn get_about(State(state): State<CmsState>) -> Result<Json<AboutContent>, CmsError> {
    Ok(Json(sections::about(&state.store).await?))
}

/// PUT /api/about/hero
pub async fn put_hero(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<AboutHero>,
) -> Result<Json<Value>, CmsError> {
    let data = update_about_section(&state.store, |a| &mut a.hero, body).await?;
    Ok(updated(data, "Hero"))
}

/// PUT /api/about/storyIntro
pub async fn put_story_intro(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<StoryIntro>,
) -> Result<Json<Value>, CmsError> {
    let data = update_about_section(&state.store, |a| &mut a.story_intro, body).await?;
    Ok(updated(data, "Story intro"))
}

/// PUT /api/about/story
pub async fn put_story(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<Story>,
) -> Result<Json<Value>, CmsError> {
    let data = update_about_section(&state.store, |a| &mut a.story, body).await?;
    Ok(updated(data, "Story"))
}

/// PUT /api/about/quote
pub async fn put_quote(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<Quote>,
) -> Result<Json<Value>, CmsError> {
    let data = update_about_section(&state.store, |a| &mut a.quote, body).await?;
    Ok(updated(data, "Quote"))
}

/// PUT /api/about/team
pub async fn put_team(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<AboutTeam>,
) -> Result<Json<Value>, CmsError> {
    let data = update_about_section(&state.store, |a| &mut a.team, body).await?;
    Ok(updated(data, "Team"))
}

/// PUT /api/about/gallery
pub async fn put_gallery(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<Gallery>,
) -> Result<Json<Value>, CmsError> {
    let data = update_about_section(&state.store, |a| &mut a.gallery, body).await?;
    Ok(updated(data, "Gallery"))
}
