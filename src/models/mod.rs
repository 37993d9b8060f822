//! Request and Response models for the search API
//!
//! This module defines the dictionary data model and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod jisho;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use jisho::{Entry, Japanese, Link, LookupResult, Meta, Sense, Source, STATUS_OK};
pub use requests::SearchParams;
pub use responses::{HealthResponse, MessageResponse, StatsResponse};
