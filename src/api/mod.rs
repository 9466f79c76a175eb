//! HTTP API layer for Player Gate.
//!
//! Provides the status, profile evaluation and player lookup endpoints.

pub mod handlers;
mod routes;
pub mod types;

pub use routes::build_router;
