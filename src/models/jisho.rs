//! Jisho dictionary data model
//!
//! Mirrors the body returned by `GET /api/v1/search/words`. The same shape is
//! stored in the key-value cache and returned by the search endpoint.
//!
//! Every level keeps fields it does not model in `extra`, and a `null` reads
//! as the field's default, so a payload passes through without validation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Status value the upstream reports for a successful search.
pub const STATUS_OK: u16 = 200;

/// Reads `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// == Lookup Result ==
/// Full search result: response metadata plus the ordered entry list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupResult {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LookupResult {
    /// Creates a successful result holding the given entries.
    pub fn new(data: Vec<Entry>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Creates a result with the given status and no entries.
    pub fn empty(status: u16) -> Self {
        Self {
            meta: Meta {
                status,
                ..Meta::default()
            },
            ..Self::default()
        }
    }

    /// True when the embedded status reports success.
    pub fn is_ok(&self) -> bool {
        self.meta.status == STATUS_OK
    }

    /// Drops the entries of a result whose status is not a success.
    pub fn normalized(mut self) -> Self {
        if !self.is_ok() {
            self.data.clear();
        }
        self
    }
}

/// Response metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub status: u16,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            status: STATUS_OK,
            extra: Map::new(),
        }
    }
}

// == Entry ==
/// One dictionary entry for a looked-up word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_common: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub jlpt: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub japanese: Vec<Japanese>,
    #[serde(deserialize_with = "null_as_default")]
    pub senses: Vec<Sense>,
    /// Fields not modelled above (e.g. `attribution`), kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A written form and its reading. Kana-only words have no `word`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Japanese {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reading: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One meaning of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    #[serde(deserialize_with = "null_as_default")]
    pub english_definitions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub parts_of_speech: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub restrictions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub see_also: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub source: Vec<Source>,
    #[serde(deserialize_with = "null_as_default")]
    pub info: Vec<String>,
    /// e.g. `sentences`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Source-language gloss for loanwords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
