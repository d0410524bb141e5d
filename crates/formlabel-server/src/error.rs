use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use formlabel_net::FetchError;
use serde::Serialize;

/// Message returned for every fetch failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch HTML content from the provided URL.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to fetch HTML content from the provided URL.")]
    Fetch(#[source] FetchError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Analysis failed: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Fetch(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_message_matches_constant() {
        let err = ApiError::Fetch(FetchError::Disallowed { url: "http://x/".to_string() });
        assert_eq!(err.to_string(), FETCH_FAILED_MESSAGE);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_is_500() {
        assert_eq!(
            ApiError::Internal("panic".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
