//! API Module
//!
//! HTTP handlers and routing for the dictionary proxy.
//!
//! # Endpoints
//! - `GET /api/search?term=<word>` - Cached dictionary lookup
//! - `GET /api/stats` - Lookup counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
