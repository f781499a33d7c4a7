use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;

use crate::domain::errors::DomainError;

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            status: status.as_u16(),
            message: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let response = DomainError::conflict("already there").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let body = body_of(response).await;
        assert_eq!(body.status, 409);
        assert_eq!(body.message, "already there");
    }

    #[tokio::test]
    async fn test_each_kind_sets_status() {
        let cases = vec![
            (DomainError::validation("v"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("n"), StatusCode::NOT_FOUND),
            (DomainError::conflict("c"), StatusCode::CONFLICT),
            (DomainError::unknown("u"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let message = error.message().to_string();
            let response = error.into_response();
            assert_eq!(response.status(), expected);
            let body = body_of(response).await;
            assert_eq!(body.status, expected.as_u16());
            assert_eq!(body.message, message);
        }
    }
}
