//! Score-to-age mapping

use serde::{Deserialize, Serialize};

/// Youngest age reported under [`AgePolicy::Clamped`]
pub const MIN_AGE: i32 = 5;
/// Age reported for any score of 14 or above
pub const MAX_AGE: i32 = 22;

const COLLEGE_SCORE: f64 = 14.0;

/// How out-of-range ages are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgePolicy {
    /// Ages are kept within `MIN_AGE..=MAX_AGE`
    #[default]
    Clamped,
    /// Unclamped piecewise rule; very easy texts map below 5
    Unclamped,
}

/// `22` for scores of 14 and above, otherwise `ceil(score) + 5`.
#[must_use]
pub fn raw_age(score: f64) -> i32 {
    if score >= COLLEGE_SCORE {
        MAX_AGE
    } else {
        score.ceil() as i32 + 5
    }
}

#[must_use]
pub fn age_for_score(score: f64, policy: AgePolicy) -> i32 {
    let age = raw_age(score);
    match policy {
        AgePolicy::Clamped => age.clamp(MIN_AGE, MAX_AGE),
        AgePolicy::Unclamped => age,
    }
}
