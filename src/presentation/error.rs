use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::application::ports::TranscriptionError;
use crate::application::services::ValidationError;

/// Closed set of client-facing error categories. The string tag is part of
/// the API contract; internal error representations never leak into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    Engine,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request_error",
            Self::Engine => "engine_error",
            Self::Internal => "internal_error",
        }
    }
}

/// A fully formed client-facing error: constructed at the point of detection,
/// never mutated, serialized directly as the response body.
#[derive(Debug)]
pub struct ApiError {
    message: String,
    kind: ErrorKind,
    param: String,
    status: StatusCode,
}

impl ApiError {
    pub fn invalid_request(message: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::InvalidRequest,
            param: param.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::InvalidRequest,
            param: "Authorization".to_string(),
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn unprocessable(message: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::InvalidRequest,
            param: param.into(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn engine(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Engine,
            param: String::new(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Internal,
            param: String::new(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::invalid_request(e.message, e.param)
    }
}

impl From<TranscriptionError> for ApiError {
    fn from(e: TranscriptionError) -> Self {
        if e.is_input_error() {
            tracing::warn!(error = %e, "Rejected engine input");
            Self::invalid_request(e.to_string(), "")
        } else {
            tracing::error!(error = %e, "Engine failure");
            Self::engine(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "type": self.kind.as_str(),
                "param": self.param,
                "code": self.status.as_u16(),
            }
        }));
        if self.status == StatusCode::UNAUTHORIZED {
            (self.status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (self.status, body).into_response()
        }
    }
}
