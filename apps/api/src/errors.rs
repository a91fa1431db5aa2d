#![allow(dead_code)]

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::error::{AnswerError, CollectorError, SessionError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Navigation boundary: {0}")]
    NavigationBoundary(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<AnswerError> for AppError {
    fn from(err: AnswerError) -> Self {
        AppError::InvalidAnswer(err.to_string())
    }
}

impl From<CollectorError> for AppError {
    fn from(err: CollectorError) -> Self {
        match err {
            CollectorError::InvalidAnswer(e) => e.into(),
            e @ CollectorError::NavigationBoundary { .. } => {
                AppError::NavigationBoundary(e.to_string())
            }
            e @ (CollectorError::Unanswered { .. } | CollectorError::Incomplete { .. }) => {
                AppError::Conflict(e.to_string())
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(id) => AppError::NotFound(format!("Session {id} not found")),
            e @ SessionError::CapacityExceeded(_) => AppError::CapacityExceeded(e.to_string()),
            SessionError::Collector(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidAnswer(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_ANSWER",
                msg.clone(),
            ),
            AppError::NavigationBoundary(msg) => {
                tracing::debug!("Navigation boundary: {msg}");
                (StatusCode::CONFLICT, "NAVIGATION_BOUNDARY", msg.clone())
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::CapacityExceeded(msg) => {
                tracing::warn!("Capacity exceeded: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CAPACITY_EXCEEDED",
                    "Too many active assessments, try again later".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
