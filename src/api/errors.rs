use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::errors::LookupError;

/// Every failure a request can end with.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Route not found")]
    RouteNotFound,

    /// The request path could not be decoded
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_moods: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, available_moods) = match self {
            ApiError::Lookup(LookupError::MoodNotFound { available_moods }) => (
                StatusCode::NOT_FOUND,
                "Mood not found".to_string(),
                Some(available_moods),
            ),
            ApiError::Lookup(e @ LookupError::MalformedMood(_)) => {
                error!("Server error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::Internal.to_string(),
                    None,
                )
            }
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail, None),
            e @ (ApiError::Lookup(LookupError::NoVideosForMood) | ApiError::RouteNotFound) => {
                (StatusCode::NOT_FOUND, e.to_string(), None)
            }
            e @ ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None),
        };
        (
            status,
            Json(ErrorBody {
                error,
                available_moods,
            }),
        )
            .into_response()
    }
}

/// Turns a panic caught inside a handler into a generic `500` answer.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("Server error: {detail}");
    ApiError::Internal.into_response()
}
