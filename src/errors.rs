use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Where in the request a rejected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Path,
    Query,
    Body,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { location: Location, message: String },

    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn validation(location: Location, message: impl Into<String>) -> Self {
        AppError::Validation {
            location,
            message: message.into(),
        }
    }

    pub fn invalid(location: Location, errors: ValidationErrors) -> Self {
        AppError::validation(location, errors.to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(Location::Path, rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation(Location::Query, rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(Location::Body, rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            AppError::Validation { location, message } => {
                tracing::debug!(?location, %message, "request rejected");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "detail": [{
                            "loc": [location],
                            "msg": message,
                            "type": "validation_error",
                        }]
                    }),
                )
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, json!({ "detail": self.to_string() })),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    #[derive(Validate)]
    struct Bounded {
        #[validate(range(max = 5))]
        value: i64,
    }

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_422_with_location() {
        let (status, body) =
            body_json(AppError::validation(Location::Query, "missing field `num1`")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"][0], "query");
        assert_eq!(body["detail"][0]["msg"], "missing field `num1`");
        assert_eq!(body["detail"][0]["type"], "validation_error");
    }

    #[tokio::test]
    async fn validator_errors_map_to_422() {
        let errors = Bounded { value: 6 }.validate().unwrap_err();

        let (status, body) = body_json(AppError::invalid(Location::Query, errors)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"][0], "query");
        assert!(body["detail"][0]["msg"].as_str().unwrap().contains("value"));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = body_json(AppError::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Not Found" }));
    }
}
