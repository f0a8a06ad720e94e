#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use brand_cms::config::Config;
use brand_cms::db::StoreHandle;
use brand_cms::server::{CmsState, cms_router};
use brand_cms::service::users;
use brand_cms::types::user::{Role, User};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PASSWORD: &str = "correct-horse";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const EDITOR_EMAIL: &str = "editor@example.com";

pub const INDEX_HTML: &str = r#"<html><body>
<h1 class="heading-style-xl">We Invest IN</h1>
<h1 class="heading-style-xl">Bold Founders</h1>
<p class="hero-note">Static note</p>
</body></html>"#;

pub const CONTACT_HTML: &str = r#"<html><body>
<h2 class="contact-title">Get in touch</h2>
<p class="contact-lead">We reply within a day.</p>
</body></html>"#;

pub struct TestApp {
    pub app: Router,
    pub state: CmsState,
    pub store: StoreHandle,
    pub admin: User,
    pub editor: User,
    pub dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Like [`spawn_app`], with a hook to adjust the config first.
pub async fn spawn_app_with(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let public = dir.path().join("public");
    std::fs::create_dir_all(&public).expect("failed to create public dir");
    std::fs::write(public.join("index.html"), INDEX_HTML).expect("failed to write index.html");
    std::fs::write(public.join("contact.html"), CONTACT_HTML)
        .expect("failed to write contact.html");

    // Keep test behavior stable regardless of the repo's `config.toml` or env.
    let mut config = Config {
        data_dir: dir.path().join("data"),
        public_dir: public,
        uploads_dir: dir.path().join("uploads"),
        jwt_secret: "test-secret".to_string(),
        bcrypt_cost: 4,
        login_per_minute: 1000,
        max_file_size: 1024,
        ..Config::default()
    };
    adjust(&mut config);

    let store = brand_cms::db::spawn(config.data_dir.clone())
        .await
        .expect("failed to spawn store");
    let admin = users::create_user(&store, ADMIN_EMAIL, PASSWORD, Role::Admin, 4)
        .await
        .expect("failed to seed admin");
    let editor = users::create_user(&store, EDITOR_EMAIL, PASSWORD, Role::Editor, 4)
        .await
        .expect("failed to seed editor");

    let state = CmsState::new(store.clone(), Arc::new(config));
    let app = cms_router(state.clone());
    TestApp {
        app,
        state,
        store,
        admin,
        editor,
        dir,
    }
}

impl TestApp {
    pub fn token(&self, user: &User) -> String {
        self.state.tokens.issue(user).expect("failed to issue token")
    }

    pub fn admin_token(&self) -> String {
        self.token(&self.admin)
    }

    pub fn editor_token(&self) -> String {
        self.token(&self.editor)
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, String) {
        let resp = self.app.clone().oneshot(req).await.expect("request failed");
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let text = String::from_utf8_lossy(&body).into_owned();
        (status, text)
    }

    /// JSON request; `body: None` sends no body.
    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, text) = self.send(json_request(method, uri, token, body)).await;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).expect("response body was not JSON")
        };
        (status, value)
    }
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("failed to build request")
}

pub const BOUNDARY: &str = "cms-test-boundary";

/// One multipart part: field name, file name, content type, bytes.
pub type Part<'a> = (&'a str, &'a str, &'a str, &'a [u8]);

pub fn multipart_request(uri: &str, token: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for (field, filename, content_type, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("failed to build request")
}
