//! Shared error type across metrics-store crates.

use thiserror::Error;

use crate::store::StoreError;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed body, unknown field, oversized body, trailing content.
    BadRequest,
    /// Content-Type other than `application/json`.
    UnsupportedMediaType,
    /// Method other than GET/POST on the metrics route.
    MethodNotAllowed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsStoreError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum MetricsStoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("store rejected entry: {0}")]
    Store(#[from] StoreError),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsStoreError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricsStoreError::BadRequest(_) => ClientCode::BadRequest,
            MetricsStoreError::UnsupportedMediaType(_) => ClientCode::UnsupportedMediaType,
            MetricsStoreError::MethodNotAllowed => ClientCode::MethodNotAllowed,
            MetricsStoreError::Store(_) | MetricsStoreError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message safe to return to the caller. Internal details stay in logs.
    pub fn client_message(&self) -> String {
        match self.client_code() {
            ClientCode::Internal => "internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}
