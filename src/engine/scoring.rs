//! Deterministic profile scoring.

use crate::domain::ProfileScore;

/// Score a uid: sum of its code points modulo 100.
///
/// Pure function of the input; the same uid always gets the same score.
pub fn score_profile(uid: &str) -> ProfileScore {
    let score = uid.chars().fold(0u32, |acc, c| (acc + c as u32) % 100);
    ProfileScore::new(score as u8)
}
