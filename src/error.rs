//! Error types for the dictionary proxy
//!
//! One enum per boundary: store, upstream, lookup, and the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::MessageResponse;

// == Store Error ==
/// Failure talking to the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection or protocol failure
    #[error("Redis error: {0}")]
    Redis(String),

    /// The store answered but refused the write
    #[error("Write rejected: {0}")]
    Rejected(String),

    /// The value could not be serialized for storage
    #[error("Could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        Self::Redis(err.to_string())
    }
}

// == Upstream Error ==
/// Failure fetching from the upstream dictionary.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport-level failure
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status
    #[error("Upstream returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not a lookup result
    #[error("Upstream body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Lookup Error ==
/// Failure of the cache-aside lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Reading the store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The cached value is not a lookup result
    #[error("Cached entry for '{key}' is corrupt: {reason}")]
    CorruptEntry { key: String, reason: String },

    /// Fetching from upstream failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

// == Api Error ==
/// Error type returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No usable `term` parameter
    #[error("Missing search term")]
    MissingTerm,

    /// `term` was supplied more than once
    #[error("Invalid search term")]
    InvalidTerm,

    /// The lookup itself failed
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingTerm | ApiError::InvalidTerm => StatusCode::BAD_REQUEST,
            ApiError::Lookup(LookupError::Upstream(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Search request failed");
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
