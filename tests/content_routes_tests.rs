mod common;

use axum::http::StatusCode;
use common::spawn_app;
use serde_json::json;

#[tokio::test]
async fn homepage_section_update_round_trips() {
    let t = spawn_app().await;
    let token = t.editor_token();

    let (status, before) = t.json("GET", "/api/homepage/content", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before["success"], true);
    assert_eq!(before["data"]["hero"]["title"], "Ventured Brands");

    let (status, body) = t
        .json(
            "PUT",
            "/api/homepage/section/hero",
            Some(&token),
            Some(json!({"headline1": "We Back"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "hero section updated successfully");
    assert_eq!(body["data"]["hero"]["headline1"], "We Back");
    assert_eq!(body["data"]["hero"]["title"], "Ventured Brands");
    assert!(body["data"]["updatedAt"].is_string());

    let (_, after) = t.json("GET", "/api/homepage/content", None, None).await;
    assert_eq!(after["data"]["hero"]["headline1"], "We Back");
    assert_eq!(after["data"]["logoSection"], before["data"]["logoSection"]);
}

#[tokio::test]
async fn typed_hero_route_keeps_absent_fields() {
    let t = spawn_app().await;
    let token = t.editor_token();

    let (status, body) = t
        .json(
            "PUT",
            "/api/homepage/hero",
            Some(&token),
            Some(json!({"subtitle": "New subtitle"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hero section updated successfully");
    assert_eq!(body["data"]["subtitle"], "New subtitle");
    assert_eq!(body["data"]["title"], "Ventured Brands");
}

#[tokio::test]
async fn content_writes_require_a_token() {
    let t = spawn_app().await;
    let (status, _) = t
        .json(
            "PUT",
            "/api/homepage/section/hero",
            None,
            Some(json!({"headline1": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = t
        .json("PUT", "/api/about/quote", None, Some(json!({"text": "x"})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn about_sections_update_independently() {
    let t = spawn_app().await;
    let token = t.editor_token();

    let (status, body) = t
        .json(
            "PUT",
            "/api/about/quote",
            Some(&token),
            Some(json!({"text": "Fortune favours the bold", "author": "Pliny"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Quote section updated successfully");
    assert_eq!(body["data"]["author"], "Pliny");

    let (status, about) = t.json("GET", "/api/about", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(about["quote"]["text"], "Fortune favours the bold");
    assert!(about["updatedAt"].is_string());
}

fn portfolio(title: &str) -> serde_json::Value {
    json!({
        "hero": {"title": title, "description": "Companies we build"},
        "projects": [
            {"id": "p1", "title": "Washology", "category": "Services", "url": "/work/washology", "sortOrder": 1}
        ]
    })
}

#[tokio::test]
async fn portfolio_replace_validates_body() {
    let t = spawn_app().await;
    let token = t.editor_token();

    let (status, body) = t
        .json("PUT", "/api/portfolio", Some(&token), Some(portfolio("")))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "\"hero.title\" is not allowed to be empty");

    let (status, body) = t
        .json("PUT", "/api/portfolio", Some(&token), Some(portfolio("Our work")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Portfolio updated successfully");
    assert!(body["data"]["lastUpdated"].is_string());

    let (_, stored) = t.json("GET", "/api/portfolio", None, None).await;
    assert_eq!(stored["hero"]["title"], "Our work");
    assert_eq!(stored["projects"][0]["isActive"], true);
}

#[tokio::test]
async fn contact_put_returns_the_document() {
    let t = spawn_app().await;
    let token = t.editor_token();

    let (status, mut doc) = t.json("GET", "/api/contact", None, None).await;
    assert_eq!(status, StatusCode::OK);
    doc["form"]["title"] = json!("Talk to us");

    let (status, body) = t
        .json("PUT", "/api/contact", Some(&token), Some(doc))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["title"], "Talk to us");
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let t = spawn_app().await;
    let token = t.editor_token();
    let req = axum::http::Request::builder()
        .method("PUT")
        .uri("/api/verticals")
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let (status, _) = t.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
