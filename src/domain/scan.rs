//! Local scan attached to every successful player lookup.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Risk classification reported by the local scan.
///
/// The scan never flags anything; the field exists so clients can rely on
/// its presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    #[default]
    None,
}

/// Lowest trace level a scan can report.
pub const MIN_TRACE_LEVEL: u8 = 1;
/// Highest trace level a scan can report.
pub const MAX_TRACE_LEVEL: u8 = 5;

/// Result of the local scan over a uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SecurityScan {
    /// The uid after the reversible obfuscation transform.
    pub obfuscated_uid: String,
    /// Always [`RiskFlag::None`].
    pub risk_flag: RiskFlag,
    /// Random level in `1..=5`.
    pub trace_level: u8,
}
