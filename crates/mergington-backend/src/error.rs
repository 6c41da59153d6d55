//! Mapping of request failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::QueryRejection;

use mergington::data::{ErrorResponse, ValidationErrorResponse, ValidationIssue};
use mergington::errors::ActivityError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error("Missing required query parameter `{0}`")]
    MissingQueryParameter(&'static str),
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Activity(ActivityError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApiError::Activity(ActivityError::AlreadySignedUp) => StatusCode::BAD_REQUEST,
            ApiError::Activity(ActivityError::NotSignedUp) => StatusCode::NOT_FOUND,
            ApiError::MissingQueryParameter(_) | ApiError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Activity(err) => (
                status,
                Json(ErrorResponse {
                    detail: err.to_string(),
                }),
            )
                .into_response(),
            ApiError::MissingQueryParameter(field) => (
                status,
                Json(ValidationErrorResponse {
                    detail: vec![ValidationIssue::missing("query", field)],
                }),
            )
                .into_response(),
            ApiError::InvalidQuery(rejection) => (
                status,
                Json(ValidationErrorResponse {
                    detail: vec![ValidationIssue::unparsable("query", rejection.body_text())],
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(
            ApiError::from(ActivityError::ActivityNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ActivityError::AlreadySignedUp).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ActivityError::NotSignedUp).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MissingQueryParameter("email").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn unparsable_query_is_422_json() {
        use axum::http::{Uri, header};
        use axum_extra::extract::Query;
        use http_body_util::BodyExt;
        use mergington::serde_json::{self, Value};

        #[derive(Debug, mergington::serde::Deserialize)]
        #[serde(crate = "mergington::serde")]
        struct Numbered {
            #[allow(dead_code)]
            page: u32,
        }

        let uri: Uri = "/activities?page=first".parse().unwrap();
        let rejection = Query::<Numbered>::try_from_uri(&uri).unwrap_err();
        let response = ApiError::from(rejection).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["detail"][0]["type"], "parsing");
        assert_eq!(body["detail"][0]["loc"], serde_json::json!(["query"]));
        assert!(body["detail"][0]["msg"].as_str().unwrap().contains("query string"));
    }
}
