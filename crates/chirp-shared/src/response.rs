//! The response envelope every endpoint answers with.

use serde::{Deserialize, Serialize};

/// Successful API response wrapper.
///
/// `statusCode` always equals the HTTP status the response is sent with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: status_code < 400,
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(200, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(201, data, message)
    }
}

/// Failure envelope.
///
/// `errors` carries stable machine-readable codes; `message` is for humans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub errors: Vec<String>,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            errors: Vec::new(),
            success: false,
        }
    }

    pub fn with_error(mut self, code: impl Into<String>) -> Self {
        self.errors.push(code.into());
        self
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message).with_error("UNAUTHORIZED")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
