use crate::error::CmsError;
use crate::middleware::{AdminUser, AuthUser, JsonBody};
use crate::server::router::CmsState;
use crate::service::sections;
use crate::types::homepage::{
    BenefitsSection, Hero, LogoSection, LogosInput, PortfolioSection, ProcessCardsInput,
    TeamSection,
};

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::{Value, json};

fn updated(data: impl Serialize, message: impl Into<String>) -> Json<Value> {
    Json(json!({ "success": true, "data": data, "message": message.into() }))
}

/// GET /api/homepage/content
pub async fn get_content(State(state): State<CmsState>) -> Result<Json<Value>, CmsError> {
    let data = sections::homepage(&state.store).await?;
    Ok(Json(json!({ "success": true, "data": data })))
}

/// PUT /api/homepage/content
pub async fn put_content(
    State(state): State<CmsState>,
    _admin: AdminUser,
    JsonBody(patch): JsonBody<Value>,
) -> Result<Json<Value>, CmsError> {
    let data = sections::update_homepage(&state.store, patch).await?;
    Ok(updated(data, "Homepage content updated successfully"))
}

/// PUT /api/homepage/section/{name}
pub async fn put_section(
    State(state): State<CmsState>,
    _user: AuthUser,
    Path(name): Path<String>,
    JsonBody(data): JsonBody<Value>,
) -> Result<Json<Value>, CmsError> {
    let doc = sections::update_homepage_section(&state.store, &name, data).await?;
    Ok(updated(doc, format!("{name} section updated successfully")))
}

/// PUT /api/homepage/hero
pub async fn put_hero(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(hero): JsonBody<Hero>,
) -> Result<Json<Value>, CmsError> {
    let data = sections::update_homepage_fields(&state.store, "hero", &hero).await?;
    Ok(updated(data, "Hero section updated successfully"))
}

/// PUT /api/homepage/logo-section
pub async fn put_logo_section(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(mut section): JsonBody<LogoSection>,
) -> Result<Json<Value>, CmsError> {
    // The list has its own route.
    section.logos = None;
    let data = sections::update_homepage_fields(&state.store, "logoSection", &section).await?;
    Ok(updated(data, "Logo section updated successfully"))
}

/// PUT /api/homepage/benefits
pub async fn put_benefits(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(section): JsonBody<BenefitsSection>,
) -> Result<Json<Value>, CmsError> {
    let data =
        sections::update_homepage_fields(&state.store, "benefitsSection", &section).await?;
    Ok(updated(data, "Benefits section updated successfully"))
}

/// PUT /api/homepage/process-cards
pub async fn put_process_cards(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<ProcessCardsInput>,
) -> Result<Json<Value>, CmsError> {
    let data = sections::replace_process_cards(&state.store, body.process_cards).await?;
    Ok(updated(data, "Process cards updated successfully"))
}

/// PUT /api/homepage/portfolio
pub async fn put_portfolio(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(section): JsonBody<PortfolioSection>,
) -> Result<Json<Value>, CmsError> {
    let data =
        sections::update_homepage_fields(&state.store, "portfolioSection", &section).await?;
    Ok(updated(data, "Portfolio section updated successfully"))
}

/// PUT /api/homepage/team
pub async fn put_team(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(section): JsonBody<TeamSection>,
) -> Result<Json<Value>, CmsError> {
    let data = sections::update_homepage_fields(&state.store, "teamSection", &section).await?;
    Ok(updated(data, "Team section updated successfully"))
}

/// PUT /api/homepage/logos
pub async fn put_logos(
    State(state): State<CmsState>,
    _user: AuthUser,
    JsonBody(body): JsonBody<LogosInput>,
) -> Result<Json<Value>, CmsError> {
    let data = sections::replace_logos(&state.store, body.logos).await?;
    Ok(updated(data, "Logos updated successfully"))
}
