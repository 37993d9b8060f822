//! Test doubles for the lookup path.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::models::{Entry, Japanese, LookupResult, Sense};
use crate::upstream::Dictionary;

enum Reply {
    Result(LookupResult),
    Status(u16),
}

/// Dictionary that answers every search the same way and records keywords.
pub(crate) struct StubDictionary {
    reply: Reply,
    keywords: Mutex<Vec<String>>,
}

impl StubDictionary {
    pub(crate) fn returning(result: LookupResult) -> Self {
        Self {
            reply: Reply::Result(result),
            keywords: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            reply: Reply::Status(status),
            keywords: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.keywords.lock().unwrap().len()
    }

    pub(crate) fn keywords(&self) -> Vec<String> {
        self.keywords.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dictionary for StubDictionary {
    async fn search(&self, keyword: &str) -> Result<LookupResult, UpstreamError> {
        self.keywords.lock().unwrap().push(keyword.to_string());
        // Suspend like a network call so concurrent lookups interleave
        tokio::task::yield_now().await;
        match &self.reply {
            Reply::Result(result) => Ok(result.clone()),
            Reply::Status(status) => Err(UpstreamError::Status { status: *status }),
        }
    }
}

/// Minimal entry for `word`.
pub(crate) fn entry(word: &str) -> Entry {
    Entry {
        slug: word.to_string(),
        is_common: true,
        japanese: vec![Japanese {
            word: Some(word.to_string()),
            reading: String::new(),
            ..Japanese::default()
        }],
        senses: vec![Sense {
            english_definitions: vec![format!("definition of {}", word)],
            ..Sense::default()
        }],
        ..Entry::default()
    }
}
