//! Error types for the byte cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Error type for cache operations.
///
/// The engine deliberately reports a single kind: a key that was never
/// stored, was deleted, has expired, or has been evicted all look the same
/// to the caller. Consumers treat `NotFound` as "go fetch the authoritative
/// value", never as a fatal condition.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No usable value available for this key right now
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
