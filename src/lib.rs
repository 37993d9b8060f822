//! Jisho Proxy - A cache-aside proxy for the Jisho dictionary API
//!
//! Looks words up in a key-value store first and falls back to the upstream
//! search API on a miss, writing fresh results back.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use lookup::LookupService;
