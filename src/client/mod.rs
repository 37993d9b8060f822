//! Search Client Module
//!
//! Consumer-side wrapper around `GET /api/search`. Each distinct query is
//! fetched at most once successfully and then kept for the lifetime of the
//! client, with no revalidation. Concurrent fetches of the same query share
//! one request.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use thiserror::Error;
use tokio::sync::{Mutex, OnceCell, RwLock};
use tracing::debug;

use crate::models::{LookupResult, MessageResponse};

/// Failure fetching from the search endpoint.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Search returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Search response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Lookup State ==
/// What a consumer renders for one query.
#[derive(Debug, Clone, Default)]
pub struct LookupState {
    pub data: Option<Arc<LookupResult>>,
    pub error: Option<Arc<ClientError>>,
}

impl LookupState {
    /// True until either data or an error has arrived.
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

type Slot = Arc<OnceCell<Arc<LookupResult>>>;

// == Search Client ==
pub struct SearchClient {
    http: Client,
    endpoint: String,
    slots: Mutex<HashMap<String, Slot>>,
    errors: RwLock<HashMap<String, Arc<ClientError>>>,
}

impl SearchClient {
    /// Creates a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!("{}/api/search", base_url.trim_end_matches('/')),
            slots: Mutex::new(HashMap::new()),
            errors: RwLock::new(HashMap::new()),
        }
    }

    // == Fetch ==
    /// Returns the result for `query`, requesting it only if no earlier
    /// fetch succeeded. A failure is recorded and the next call retries.
    pub async fn fetch(&self, query: &str) -> Result<Arc<LookupResult>, Arc<ClientError>> {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots.entry(query.to_string()).or_default().clone()
        };

        match slot.get_or_try_init(|| self.request(query)).await {
            Ok(data) => {
                self.errors.write().await.remove(query);
                Ok(data.clone())
            }
            Err(e) => {
                let e = Arc::new(e);
                self.errors
                    .write()
                    .await
                    .insert(query.to_string(), e.clone());
                Err(e)
            }
        }
    }

    // == State ==
    /// Snapshot of what is known about `query` without issuing a request.
    pub async fn state(&self, query: &str) -> LookupState {
        let data = self
            .slots
            .lock()
            .await
            .get(query)
            .and_then(|slot| slot.get().cloned());

        let error = match data {
            Some(_) => None,
            None => self.errors.read().await.get(query).cloned(),
        };

        LookupState { data, error }
    }

    async fn request(&self, query: &str) -> Result<Arc<LookupResult>, ClientError> {
        debug!(query, "Fetching search results");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("term", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<MessageResponse>(&body)
                .map(|m| m.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Arc::new(serde_json::from_slice(&body)?))
    }
}
