use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CmsError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Upload(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Access denied. Admin privileges required.")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Too many requests, please try again later")]
    RateLimited,

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Store error: {0}")]
    Store(String),
}

impl CmsError {
    pub fn status(&self) -> StatusCode {
        match self {
            CmsError::Validation(_) | CmsError::Duplicate(_) | CmsError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            CmsError::Unauthorized(_) | CmsError::Token(_) => StatusCode::UNAUTHORIZED,
            CmsError::Forbidden => StatusCode::FORBIDDEN,
            CmsError::NotFound(_) => StatusCode::NOT_FOUND,
            CmsError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            CmsError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            CmsError::Io(_) | CmsError::Json(_) | CmsError::Hash(_) | CmsError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CmsError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            CmsError::Token(_) => "Token is not valid".to_string(),
            CmsError::Io(_) | CmsError::Json(_) | CmsError::Hash(_) | CmsError::Store(_) => {
                error!(error = %self, "request failed");
                "Server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiErrorBody { message })).into_response()
    }
}

/// Body of every error response.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let err = CmsError::Store("mailbox closed".to_string());
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"message":"Server error"}"#);
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            CmsError::Duplicate("dup".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CmsError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            CmsError::NotFound("Page not found".into()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
