/*
   Module `api` defines the JSON envelopes shared by every HTTP handler.

   Successes serialize the payload directly. Failures serialize to `{"error": "..."}` with an
   appropriate status code, which is the shape the game client expects.
*/

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::models::{GenerateDungeonError, LoadDungeonError, SaveDungeonError};

/// A successful response, carrying a status code and a JSON payload.
#[derive(Debug, Clone)]
pub(super) struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ApiErrorBody {
    error: String,
}

/// A failed response. Internal error details are logged, never surfaced to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ApiError {
    InternalServerError(String),
    NotFound(String),
    UnprocessableEntity(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        match self {
            InternalServerError(e) => {
                tracing::error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorBody {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ApiErrorBody { error: message }),
            )
                .into_response(),
            UnprocessableEntity(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiErrorBody { error: message }),
            )
                .into_response(),
        }
    }
}

impl From<SaveDungeonError> for ApiError {
    fn from(e: SaveDungeonError) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl From<LoadDungeonError> for ApiError {
    fn from(e: LoadDungeonError) -> Self {
        match e {
            LoadDungeonError::NotFound { .. } => Self::NotFound(e.to_string()),
            LoadDungeonError::Unknown(_) => Self::InternalServerError(e.to_string()),
        }
    }
}

impl From<GenerateDungeonError> for ApiError {
    fn from(e: GenerateDungeonError) -> Self {
        Self::UnprocessableEntity(e.to_string())
    }
}
