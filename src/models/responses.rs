//! Response DTOs for the search API
//!
//! Defines the structure of outgoing HTTP response bodies other than the
//! lookup result itself.

use serde::{Deserialize, Serialize};

use crate::lookup::StatsSnapshot;

/// Response body for the stats endpoint (GET /api/stats)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Lookups answered from the store
    pub cache_hits: u64,
    /// Lookups that found nothing in the store
    pub cache_misses: u64,
    /// Requests sent to the upstream dictionary
    pub upstream_calls: u64,
    /// Successful write-backs
    pub cache_writes: u64,
    /// Write-backs that failed and were swallowed
    pub cache_write_failures: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(stats: StatsSnapshot) -> Self {
        Self {
            cache_hits: stats.cache_hits,
            cache_misses: stats.cache_misses,
            upstream_calls: stats.upstream_calls,
            cache_writes: stats.cache_writes,
            cache_write_failures: stats.cache_write_failures,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Body for every non-success response: `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
