mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{multipart_request, spawn_app};
use serde_json::Value;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-bytes";

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("response body was not JSON")
}

#[tokio::test]
async fn image_upload_list_and_delete() {
    let t = spawn_app().await;
    let token = t.editor_token();

    let req = multipart_request(
        "/api/upload/image",
        &token,
        &[("file", "Logo.PNG", "image/png", PNG)],
    );
    let (status, text) = t.send(req).await;
    assert_eq!(status, StatusCode::OK, "{text}");
    let body = parse(&text);
    assert_eq!(body["success"], true);
    assert_eq!(body["file"]["originalName"], "Logo.PNG");
    assert_eq!(body["file"]["size"], PNG.len());
    let filename = body["file"]["filename"].as_str().unwrap().to_string();
    assert!(filename.starts_with("file-"));
    assert!(filename.ends_with(".png"));
    assert_eq!(body["filePath"], format!("uploads/{filename}"));

    let served = Request::builder()
        .uri(format!("/uploads/{filename}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = t.send(served).await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = t.json("GET", "/api/upload/list", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["files"][0]["filename"], filename.as_str());
    assert_eq!(list["files"][0]["url"], format!("/uploads/{filename}"));

    let uri = format!("/api/upload/{filename}");
    let (status, body) = t.json("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "File deleted successfully");

    let (status, body) = t.json("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "File not found");
}

#[tokio::test]
async fn non_images_are_rejected() {
    let t = spawn_app().await;
    let req = multipart_request(
        "/api/upload/image",
        &t.editor_token(),
        &[("file", "notes.txt", "text/plain", b"hello")],
    );
    let (status, text) = t.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&text)["message"], "Only image files are allowed");
}

#[tokio::test]
async fn oversized_files_are_rejected_and_removed() {
    let t = spawn_app().await;
    let token = t.editor_token();
    let big = vec![0u8; 2048];
    let req = multipart_request(
        "/api/upload/image",
        &token,
        &[("file", "big.png", "image/png", &big)],
    );
    let (status, text) = t.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&text)["message"], "File too large");

    let (_, list) = t.json("GET", "/api/upload/list", Some(&token), None).await;
    assert_eq!(list["files"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn multiple_upload_accepts_several_images() {
    let t = spawn_app().await;
    let req = multipart_request(
        "/api/upload/multiple",
        &t.editor_token(),
        &[
            ("images", "a.jpg", "image/jpeg", PNG),
            ("images", "b.webp", "image/webp", PNG),
        ],
    );
    let (status, text) = t.send(req).await;
    assert_eq!(status, StatusCode::OK, "{text}");
    let body = parse(&text);
    assert_eq!(body["message"], "2 files uploaded successfully");
    assert_eq!(body["files"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unexpected_field_is_rejected() {
    let t = spawn_app().await;
    let req = multipart_request(
        "/api/upload/image",
        &t.editor_token(),
        &[("avatar", "a.png", "image/png", PNG)],
    );
    let (status, text) = t.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&text)["message"], "Unexpected field");
}

#[tokio::test]
async fn traversal_in_delete_is_rejected() {
    let t = spawn_app().await;
    let (status, body) = t
        .json("DELETE", "/api/upload/..%2Fsecret", Some(&t.editor_token()), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid filename");
}

#[tokio::test]
async fn uploads_require_a_token() {
    let t = spawn_app().await;
    let req = Request::builder()
        .method("GET")
        .uri("/api/upload/list")
        .body(Body::empty())
        .unwrap();
    let (status, _) = t.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
