//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::KvStore;
use crate::error::Result;
use crate::lookup::LookupService;
use crate::models::{HealthResponse, LookupResult, SearchParams, StatsResponse};
use crate::upstream::Dictionary;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside lookup over the shared store client
    pub lookup: LookupService,
}

impl AppState {
    /// Creates a new AppState with the given lookup service.
    pub fn new(lookup: LookupService) -> Self {
        Self { lookup }
    }

    /// Creates a new AppState from a store and an upstream dictionary.
    pub fn with_backends(store: Arc<dyn KvStore>, dictionary: Arc<dyn Dictionary>) -> Self {
        Self::new(LookupService::new(store, dictionary))
    }
}

/// Handler for GET /api/search?term=<word>
///
/// Validates the term, then runs a cached lookup.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LookupResult>> {
    let params = SearchParams::from_pairs(pairs)?;
    let result = state.lookup.lookup(&params.term, true).await?;

    Ok(Json(result))
}

/// Handler for GET /api/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.lookup.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::error::ApiError;
    use crate::lookup::test_support::{entry, StubDictionary};

    fn pairs(items: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn state_with(dictionary: &Arc<StubDictionary>) -> AppState {
        AppState::with_backends(Arc::new(MemoryStore::new()), dictionary.clone())
    }

    #[tokio::test]
    async fn test_search_handler() {
        let dictionary = Arc::new(StubDictionary::returning(LookupResult::new(vec![entry("犬")])));
        let state = state_with(&dictionary);

        let response = search_handler(State(state), pairs(&[("term", "犬")]))
            .await
            .unwrap();
        assert_eq!(response.data[0].slug, "犬");
    }

    #[tokio::test]
    async fn test_search_missing_term_skips_lookup() {
        let dictionary = Arc::new(StubDictionary::returning(LookupResult::new(vec![])));
        let state = state_with(&dictionary);

        let result = search_handler(State(state), pairs(&[])).await;
        assert!(matches!(result, Err(ApiError::MissingTerm)));
        assert_eq!(dictionary.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_repeated_term_skips_lookup() {
        let dictionary = Arc::new(StubDictionary::returning(LookupResult::new(vec![])));
        let state = state_with(&dictionary);

        let result = search_handler(State(state), pairs(&[("term", "a"), ("term", "b")])).await;
        assert!(matches!(result, Err(ApiError::InvalidTerm)));
        assert_eq!(dictionary.calls(), 0);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let dictionary = Arc::new(StubDictionary::returning(LookupResult::new(vec![entry("犬")])));
        let state = state_with(&dictionary);

        let searched = search_handler(State(state.clone()), pairs(&[("term", "犬")]))
            .await
            .unwrap();
        assert_eq!(searched.data.len(), 1);

        let response = stats_handler(State(state)).await;
        assert_eq!(response.cache_misses, 1);
        assert_eq!(response.upstream_calls, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
