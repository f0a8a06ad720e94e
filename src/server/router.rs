use crate::config::Config;
use crate::db::StoreHandle;
use crate::handlers::{self, about, auth, contact, frontend, homepage, pages, portfolio, upload, verticals};
use crate::service::auth::TokenKeys;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post, put};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Multipart framing on top of the raw file bytes.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct CmsState {
    pub store: StoreHandle,
    pub config: Arc<Config>,
    pub tokens: Arc<TokenKeys>,
    /// Login attempts per normalized email.
    pub login_limiter: Arc<DefaultKeyedRateLimiter<String>>,
}

impl CmsState {
    pub fn new(store: StoreHandle, config: Arc<Config>) -> Self {
        let per_minute = NonZeroU32::new(config.login_per_minute).unwrap_or(NonZeroU32::MIN);
        Self {
            store,
            tokens: Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_hours)),
            login_limiter: Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute))),
            config,
        }
    }
}

fn cors_layer(cfg: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(origin = %o, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}

fn api_router(cfg: &Config) -> Router<CmsState> {
    let upload_limit = cfg
        .max_file_size
        .saturating_mul(cfg.max_files.max(1))
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/health", get(handlers::health))
        // auth
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/password", put(auth::change_password))
        // homepage
        .route(
            "/homepage/content",
            get(homepage::get_content).put(homepage::put_content),
        )
        .route("/homepage/section/{name}", put(homepage::put_section))
        .route("/homepage/hero", put(homepage::put_hero))
        .route("/homepage/logo-section", put(homepage::put_logo_section))
        .route("/homepage/benefits", put(homepage::put_benefits))
        .route("/homepage/process-cards", put(homepage::put_process_cards))
        .route("/homepage/portfolio", put(homepage::put_portfolio))
        .route("/homepage/team", put(homepage::put_team))
        .route("/homepage/logos", put(homepage::put_logos))
        // about
        .route("/about", get(about::get_about))
        .route("/about/hero", put(about::put_hero))
        .route("/about/storyIntro", put(about::put_story_intro))
        .route("/about/story", put(about::put_story))
        .route("/about/quote", put(about::put_quote))
        .route("/about/team", put(about::put_team))
        .route("/about/gallery", put(about::put_gallery))
        // whole documents
        .route(
            "/portfolio",
            get(portfolio::get_portfolio).put(portfolio::put_portfolio),
        )
        .route(
            "/verticals",
            get(verticals::get_verticals).put(verticals::put_verticals),
        )
        .route("/contact", get(contact::get_contact).put(contact::put_contact))
        // pages
        .route("/pages", get(pages::list_pages).post(pages::create_page))
        .route("/pages/scan/html", post(pages::scan_html))
        .route(
            "/pages/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/pages/{id}/content", post(pages::set_content))
        // uploads
        .route(
            "/upload/image",
            post(upload::upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/upload/multiple",
            post(upload::upload_multiple).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/upload/list", get(upload::list_uploads))
        .route("/upload/{filename}", axum::routing::delete(upload::delete_upload))
        .layer(DefaultBodyLimit::max(cfg.json_body_limit))
}

fn site_router(cfg: &Config) -> Router<CmsState> {
    let public = &cfg.public_dir;
    Router::new()
        .route("/", get(frontend::home))
        .route("/about", get(frontend::about))
        .route("/contact", get(frontend::contact))
        .route("/portfolio", get(frontend::portfolio))
        .route("/verticals", get(frontend::verticals))
        .route("/work/{slug}", get(frontend::work))
        .route("/categories/{slug}", get(frontend::category))
        .nest_service("/uploads", ServeDir::new(&cfg.uploads_dir))
        .nest_service("/admin", ServeDir::new(public.join("admin")))
        .nest_service("/css", ServeDir::new(public.join("css")))
        .nest_service("/js", ServeDir::new(public.join("js")))
        .nest_service("/images", ServeDir::new(public.join("images")))
        .nest_service("/fonts", ServeDir::new(public.join("fonts")))
}

/// Build the full application: JSON API under `/api`, the public site,
/// static assets, and a JSON 404 for everything else.
pub fn cms_router(state: CmsState) -> Router {
    let cfg = state.config.clone();
    Router::new()
        .nest("/api", api_router(&cfg))
        .merge(site_router(&cfg))
        .fallback(handlers::not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(cors_layer(&cfg))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
