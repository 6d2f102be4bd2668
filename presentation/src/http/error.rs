//! HTTP-facing errors

use super::dto::ErrorResponseDto;
use thiserror::Error;
use verdict_application::RouterError;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown action: {0} (expected \"generate\" or \"generate-with-fact-check\")")]
    UnknownAction(String),

    #[error("Missing action (expected \"generate\" or \"generate-with-fact-check\")")]
    MissingAction,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Router(#[from] RouterError),
}

impl ApiError {
    /// 400 for caller mistakes, 503 when every model failed (retryable)
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Router(RouterError::Exhausted { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UnknownAction(_)
            | ApiError::MissingAction
            | ApiError::InvalidBody(_)
            | ApiError::Router(RouterError::Validation(_)) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn into_response(self) -> Response {
        let status = self.status();
        warp::reply::with_status(
            warp::reply::json(&ErrorResponseDto::new(self.to_string())),
            status,
        )
        .into_response()
    }
}
