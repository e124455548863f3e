use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    Conflict(String),
    InternalServerError(String),
    BadRequest(String),
    /// Rejected input; `field` names the offending request field.
    Validation { field: &'static str, message: String },
    /// The AI service answered with a non-success status, an unreadable
    /// payload, or could not be reached at all (`status: None`).
    Upstream { status: Option<u16>, message: String },
    /// The profile store could not be read or written. Nothing was committed.
    Storage(String),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation { field, message: message.into() }
    }

    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::Upstream { status, message: message.into() }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_status: Option<u16>,
}

impl ErrorResponse {
    fn message(msg: &str) -> Self {
        ErrorResponse { error: msg.to_string(), field: None, upstream_status: None }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Validation { field, message } => write!(f, "Invalid {}: {}", field, message),
            AppError::Upstream { status: Some(code), message } => {
                write!(f, "Upstream Error ({}): {}", code, message)
            }
            AppError::Upstream { status: None, message } => write!(f, "Upstream Error: {}", message),
            AppError::Storage(msg) => write!(f, "Storage Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::InternalServerError(_) | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Conflict(msg)
            | AppError::InternalServerError(msg)
            | AppError::BadRequest(msg)
            | AppError::Storage(msg) => ErrorResponse::message(msg),
            AppError::Validation { field, message } => ErrorResponse {
                error: message.clone(),
                field: Some(*field),
                upstream_status: None,
            },
            AppError::Upstream { status, message } => ErrorResponse {
                error: message.clone(),
                field: None,
                upstream_status: *status,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_kind() {
        assert_eq!(AppError::validation("steps", "bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::upstream(Some(503), "down").status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::Storage("disk".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_embeds_upstream_status() {
        let err = AppError::upstream(Some(429), "AI service error: 429");
        assert_eq!(err.to_string(), "Upstream Error (429): AI service error: 429");
    }
}
