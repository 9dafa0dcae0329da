//! Error types for the HTTP layer.
//!
//! [`ApiError`] is the single failure type handlers return. Its
//! [`IntoResponse`] implementation owns the status-code mapping:
//!
//! | Variant               | Status |
//! |-----------------------|--------|
//! | `Validation`          | 422    |
//! | `NotFound`            | 404    |
//! | `UpstreamUnavailable` | 503    |
//! | `Unexpected`          | 500    |

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::pokemon::FieldError;
use crate::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Query, path or body input violated a constraint.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    /// Upstream could not be reached or refused to answer.
    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn pokemon_not_found(id: i64) -> Self {
        Self::NotFound(format!("Pokemon with ID {id} not found"))
    }

    /// Classify an upstream failure. `what` names the resource being fetched.
    pub fn from_upstream(what: &str, err: UpstreamError) -> Self {
        if err.is_unavailable() {
            Self::UpstreamUnavailable(format!("Failed to fetch {what} from external API: {err}"))
        } else {
            Self::Unexpected(err.to_string())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::Validation(errors) => {
                tracing::debug!(errors = ?errors, "Rejected invalid input");
                json!({ "detail": errors })
            }
            Self::NotFound(_) => json!({ "detail": self.to_string() }),
            Self::UpstreamUnavailable(_) => {
                tracing::warn!(error = %self, "Upstream unavailable");
                json!({ "detail": self.to_string() })
            }
            Self::Unexpected(_) => {
                tracing::error!(error = %self, "Unexpected failure");
                json!({ "detail": self.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(vec![FieldError::new("query", "query", rejection.body_text())])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(vec![FieldError::new("path", "id", rejection.body_text())])
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![FieldError::new("body", "body", rejection.body_text())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation(vec![]).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::pokemon_not_found(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UpstreamUnavailable("down".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Unexpected("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_classification() {
        let err = ApiError::from_upstream(
            "pokemons",
            UpstreamError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        );
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().starts_with("Failed to fetch pokemons from external API"));

        let decode = serde_json::from_str::<u8>("{").unwrap_err();
        let err = ApiError::from_upstream("pokemon", UpstreamError::Decode(decode));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err
            .to_string()
            .starts_with("An unexpected error occurred: invalid upstream response"));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ApiError::pokemon_not_found(42).to_string(),
            "Pokemon with ID 42 not found"
        );
    }
}
