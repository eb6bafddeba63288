use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

/// Whether an operation can legitimately answer 404.
///
/// Lookups, updates and deletes address an existing user; creation never
/// does, so a not-found failure there is reported as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundPolicy {
    Supported,
    Unsupported,
}

impl ApiError {
    /// Map by [`ErrorKind`], never by message text.
    ///
    /// Only errors built with [`DomainError::failure`] get their kind from
    /// the message ("not found" in any case). An error created with an
    /// explicit kind keeps it, so a validation error whose text happens to
    /// say "not found" is still a 400.
    pub fn from_domain(err: DomainError, policy: NotFoundPolicy) -> Self {
        let message = err.message().to_string();
        match (err.kind(), policy) {
            (ErrorKind::NotFound, NotFoundPolicy::Supported) => ApiError::NotFound(message),
            (ErrorKind::NotFound, NotFoundPolicy::Unsupported) => ApiError::BadRequest(message),
            (ErrorKind::Validation, _) => ApiError::BadRequest(message),
            (ErrorKind::Internal, _) => ApiError::Internal(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "message": self.message()
        }));

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::from_domain(err, NotFoundPolicy::Supported)
    }
}

// Extractor failures are client mistakes
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Success -> 200 with the value, not found -> 404, anything else -> 400.
pub fn lookup_response<T: Serialize>(result: DomainResult<T>) -> ApiResult<Json<T>> {
    result
        .map(Json)
        .map_err(|err| ApiError::from_domain(err, NotFoundPolicy::Supported))
}

/// Success -> 200 with the value, any failure -> 400.
pub fn create_response<T: Serialize>(result: DomainResult<T>) -> ApiResult<Json<T>> {
    result
        .map(Json)
        .map_err(|err| ApiError::from_domain(err, NotFoundPolicy::Unsupported))
}

/// Success -> 200 with an empty body.
pub fn empty_response(result: DomainResult<()>) -> ApiResult<StatusCode> {
    result
        .map(|()| StatusCode::OK)
        .map_err(|err| ApiError::from_domain(err, NotFoundPolicy::Supported))
}
