//! Profile scoring domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Scores strictly above this value are verified.
pub const VERIFIED_THRESHOLD: u8 = 50;

/// Verification status derived from the integrity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProfileStatus {
    #[serde(rename = "verified")]
    Verified,
    #[serde(rename = "under review")]
    UnderReview,
}

impl ProfileStatus {
    pub fn from_score(score: u8) -> Self {
        if score > VERIFIED_THRESHOLD {
            ProfileStatus::Verified
        } else {
            ProfileStatus::UnderReview
        }
    }
}

impl std::fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileStatus::Verified => write!(f, "verified"),
            ProfileStatus::UnderReview => write!(f, "under review"),
        }
    }
}

/// Deterministic score computed from a uid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileScore {
    /// Sum of the uid's code points modulo 100.
    pub integrity_score: u8,
    pub status: ProfileStatus,
}

impl ProfileScore {
    pub fn new(integrity_score: u8) -> Self {
        Self {
            integrity_score,
            status: ProfileStatus::from_score(integrity_score),
        }
    }
}
