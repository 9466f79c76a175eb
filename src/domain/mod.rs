//! Domain types for Player Gate.
//!
//! Transient per-request values; nothing here outlives a request.

mod profile;
mod scan;

pub use profile::*;
pub use scan::*;
