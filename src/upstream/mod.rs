//! Upstream Module
//!
//! The authoritative dictionary source consulted on a cache miss.

mod jisho;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::models::LookupResult;

pub use jisho::JishoClient;

/// A dictionary that can be searched by keyword.
#[async_trait]
pub trait Dictionary: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<LookupResult, UpstreamError>;
}
