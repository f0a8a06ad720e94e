//! Public site pages with CMS content merged in.

use crate::error::CmsError;
use crate::server::router::CmsState;
use crate::service::{pages, sections};
use crate::template::{apply_content_blocks, render_about, render_homepage};
use crate::types::homepage::HomepageContent;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, warn};

/// Frontend failures render as plain text, not the JSON error body.
pub enum PageError {
    Missing,
    Failed(CmsError),
}

impl From<CmsError> for PageError {
    fn from(e: CmsError) -> Self {
        PageError::Failed(e)
    }
}

impl From<std::io::Error> for PageError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            PageError::Missing
        } else {
            PageError::Failed(e.into())
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Missing => (StatusCode::NOT_FOUND, "Page not found").into_response(),
            PageError::Failed(e) => {
                error!(error = %e, "failed to serve page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error loading page").into_response()
            }
        }
    }
}

async fn read_template(state: &CmsState, file: &str) -> Result<String, PageError> {
    let path = pages::html_path(&state.config.public_dir, file).map_err(|_| PageError::Missing)?;
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Apply the blocks stored for `slug`, if any, to `html`.
async fn with_blocks(state: &CmsState, html: String, slug: &str) -> Result<String, PageError> {
    let Some(page) = pages::find_by_slug(&state.store, slug).await? else {
        return Ok(html);
    };
    if page.content_blocks.is_empty() {
        return Ok(html);
    }
    let patched = apply_content_blocks(&html, &page.content_blocks);
    for selector in &patched.unmatched {
        warn!(page = %slug, selector = %selector, "content block matched no element");
    }
    Ok(patched.html)
}

async fn serve(state: &CmsState, file: &str, slug: &str) -> Result<Html<String>, PageError> {
    let html = read_template(state, file).await?;
    Ok(Html(with_blocks(state, html, slug).await?))
}

fn log_unmatched(page: &str, fields: &[&'static str]) {
    for field in fields {
        warn!(page = %page, field = %field, "template fragment not found, kept static copy");
    }
}

async fn render_home(state: &CmsState) -> Result<Html<String>, PageError> {
    let template = read_template(state, "index.html").await?;
    let content: HomepageContent = state.store.read(crate::db::Document::Homepage).await?;
    let rendered = render_homepage(&template, &content);
    log_unmatched("home", &rendered.unmatched);
    Ok(Html(rendered.html))
}

/// GET /
pub async fn home(State(state): State<CmsState>) -> Result<Html<String>, PageError> {
    match render_home(&state).await {
        Ok(html) => Ok(html),
        Err(PageError::Failed(e)) => {
            warn!(error = %e, "homepage render failed, serving static copy");
            serve(&state, "index.html", "home").await
        }
        Err(missing) => Err(missing),
    }
}

/// GET /about
pub async fn about(State(state): State<CmsState>) -> Result<Html<String>, PageError> {
    let template = read_template(&state, "about.html").await?;
    let content = sections::about(&state.store).await?;
    let rendered = render_about(&template, &content);
    log_unmatched("about", &rendered.unmatched);
    Ok(Html(with_blocks(&state, rendered.html, "about").await?))
}

/// GET /contact
pub async fn contact(State(state): State<CmsState>) -> Result<Html<String>, PageError> {
    serve(&state, "contact.html", "contact").await
}

/// GET /portfolio
pub async fn portfolio(State(state): State<CmsState>) -> Result<Html<String>, PageError> {
    serve(&state, "portfolio.html", "portfolio").await
}

/// GET /verticals
pub async fn verticals(State(state): State<CmsState>) -> Result<Html<String>, PageError> {
    serve(&state, "verticals.html", "verticals").await
}

/// GET /work/{slug}
pub async fn work(
    State(state): State<CmsState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    serve(&state, &format!("work/{slug}.html"), &format!("work-{slug}")).await
}

/// GET /categories/{slug}
pub async fn category(
    State(state): State<CmsState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    serve(
        &state,
        &format!("categories/{slug}.html"),
        &format!("category-{slug}"),
    )
    .await
}
