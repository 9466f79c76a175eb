//! Access Policy - uid denylist and region allowlist.
//!
//! Both lists are fixed at startup from configuration and never mutated.

use std::collections::HashSet;

use crate::config::PolicyConfig;

/// Trait for access policy implementations.
pub trait AccessPolicy: Send + Sync {
    /// Whether the uid is denied outright.
    fn is_blocked(&self, uid: &str) -> bool;

    /// Whether lookups for the region are supported.
    fn region_allowed(&self, region: &str) -> bool;
}

/// Configuration-driven access policy backed by literal lists.
pub struct ListAccessPolicy {
    /// Exact, case-sensitive uid matches.
    blocked_uids: HashSet<String>,
    /// Stored upper-cased.
    allowed_regions: HashSet<String>,
}

impl ListAccessPolicy {
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            blocked_uids: config.blocked_uids.iter().cloned().collect(),
            allowed_regions: config
                .allowed_regions
                .iter()
                .map(|r| r.to_uppercase())
                .collect(),
        }
    }
}

impl AccessPolicy for ListAccessPolicy {
    fn is_blocked(&self, uid: &str) -> bool {
        tracing::debug!(uid = %uid, "Checking uid against denylist");
        self.blocked_uids.contains(uid)
    }

    fn region_allowed(&self, region: &str) -> bool {
        self.allowed_regions.contains(&region.to_uppercase())
    }
}
