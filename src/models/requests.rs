//! Request DTOs for the search API
//!
//! The query string is extracted as raw key/value pairs so that a repeated
//! `term` parameter can be told apart from a single one.

use crate::error::ApiError;

/// Name of the search query parameter.
pub const TERM_PARAM: &str = "term";

/// Validated parameters for `GET /api/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// The literal search term, exactly as supplied
    pub term: String,
}

impl SearchParams {
    /// Builds the params from decoded query pairs.
    ///
    /// An absent or empty `term` is missing; more than one `term` is invalid.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        let mut terms: Vec<String> = pairs
            .into_iter()
            .filter(|(name, _)| name == TERM_PARAM)
            .map(|(_, value)| value)
            .collect();

        match terms.len() {
            0 => Err(ApiError::MissingTerm),
            1 => {
                let term = terms.remove(0);
                if term.is_empty() {
                    Err(ApiError::MissingTerm)
                } else {
                    Ok(Self { term })
                }
            }
            _ => Err(ApiError::InvalidTerm),
        }
    }
}
