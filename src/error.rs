// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy of the generation endpoint.
///
/// Geocoding problems never show up here: the planner absorbs them and
/// substitutes the origin placeholder instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    /// Generation collaborator unreachable or answered with a non-success status.
    #[error("generation request failed: {0}")]
    Upstream(String),
    /// Reply text is not valid JSON once fences and surrounding prose are stripped.
    #[error("could not parse generation reply: {0}")]
    UnparsableReply(String),
    /// Reply parsed but is missing a required part of the plan.
    #[error("incomplete trip plan: {0}")]
    IncompleteReply(String),
    #[error("{0}")]
    Internal(String),
}

/// Uniform failure body: a short label plus a free-text detail string.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

impl AppError {
    /// Stable class label used by the metrics counters.
    pub fn class(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_input",
            AppError::Upstream(_) => "upstream",
            AppError::UnparsableReply(_) => "unparsable_reply",
            AppError::IncompleteReply(_) => "incomplete_reply",
            AppError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::UnparsableReply(_) | AppError::IncompleteReply(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Invalid trip request",
            AppError::Upstream(_)
            | AppError::UnparsableReply(_)
            | AppError::IncompleteReply(_) => "Failed to generate trip plan",
            AppError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.label().to_string(),
            details: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
