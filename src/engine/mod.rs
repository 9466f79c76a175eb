//! Evaluation engine for Player Gate.
//!
//! This module contains the request pipeline pieces:
//! - Access Policy: uid denylist and region allowlist
//! - Latency: artificial response delays
//! - Obfuscation: reversible uid token used in scans
//! - Scoring: deterministic profile score
//! - Upstream: region info service client
//! - Request Evaluator: orchestrates the endpoint flows

mod coordinator;
mod latency;
mod obfuscation;
mod policy;
mod scoring;
mod upstream;

pub use coordinator::*;
pub use latency::*;
pub use obfuscation::*;
pub use policy::*;
pub use scoring::*;
pub use upstream::*;
