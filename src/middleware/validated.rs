use crate::error::CmsError;
use crate::types::Validate;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

fn rejection(e: JsonRejection) -> CmsError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        CmsError::PayloadTooLarge
    } else {
        CmsError::Validation(e.body_text())
    }
}

/// JSON body whose rejections use the crate's error body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CmsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection)?;
        Ok(Self(value))
    }
}

/// JSON body that also passed [`Validate::validate`].
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = CmsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::page::PageInput;
    use axum::body::Body;

    fn request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let err = ValidJson::<PageInput>::from_request(request("{not json"), &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_validation_is_rejected() {
        let body = r#"{"name":"A","slug":"","title":"A","htmlFile":"a.html"}"#;
        let err = ValidJson::<PageInput>::from_request(request(body), &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "\"slug\" is not allowed to be empty");
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let body = r#"{"name":"A","slug":"a","title":"A","htmlFile":"a.html"}"#;
        let ValidJson(input) = ValidJson::<PageInput>::from_request(request(body), &())
            .await
            .ok()
            .unwrap();
        assert_eq!(input.slug, "a");
    }
}
