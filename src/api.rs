//! Shared types for the JSON API.

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Error;

/// The page size used when a list request does not give `limit`.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// The `skip` and `limit` query parameters for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// The body returned by successful delete requests.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

impl DeleteResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { ok: true })
    }
}

/// A JSON request body whose rejection is reported as an [ApiError], so that
/// malformed bodies also get a `{"detail": "..."}` response.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// An error from a JSON API handler, rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// A record the request refers to does not exist. The message is sent
    /// to the client as is.
    NotFound(&'static str),
    /// The request body could not be parsed into the expected type.
    InvalidBody(JsonRejection),
    /// Any other error.
    Error(Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError::Error(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail.to_owned()),
            ApiError::Error(Error::NotFound) => {
                (StatusCode::NOT_FOUND, "Not found".to_owned())
            }
            ApiError::Error(error @ (Error::DuplicateStudentId | Error::DuplicateSchedule)) => {
                (StatusCode::CONFLICT, error.to_string())
            }
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Error(error) => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
