//! Vowel-run syllable estimation
//!
//! Each maximal run of `a e i o u y` (either case) counts as one syllable,
//! with one correction for a silent trailing `e`. Tokens are taken as they
//! come from whitespace splitting, so trailing sentence punctuation is
//! still attached (`"make."`).
//!
//! Multi-character tokens without any vowel (`"hmm"`, `"42"`, `"--"`)
//! estimate to zero syllables.

use regex::Regex;
use std::sync::OnceLock;

static VOWEL_RUN: OnceLock<Regex> = OnceLock::new();

fn vowel_run() -> &'static Regex {
    VOWEL_RUN.get_or_init(|| Regex::new(r"[aeiouyAEIOUY]+").expect("valid regex"))
}

/// Words with more syllables than this are polysyllables.
pub const POLYSYLLABLE_THRESHOLD: usize = 2;

/// Number of maximal vowel runs in `token`.
#[must_use]
pub fn count_vowel_runs(token: &str) -> usize {
    vowel_run().find_iter(token).count()
}

/// Estimate the syllables in a single whitespace-delimited token.
#[must_use]
pub fn estimate_syllables(token: &str) -> usize {
    let mut syllables = count_vowel_runs(token);

    let mut tail = token.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(penultimate)) => {
            if syllables > 1 && has_silent_e(last, penultimate) {
                syllables -= 1;
            }
        }
        _ => {
            if syllables == 0 {
                syllables = 1;
            }
        }
    }

    syllables
}

/// `true` if the token is estimated to have more than two syllables.
#[must_use]
pub fn is_polysyllable(token: &str) -> bool {
    is_polysyllabic_count(estimate_syllables(token))
}

/// `true` if a syllable estimate makes its token a polysyllable.
#[must_use]
pub fn is_polysyllabic_count(syllables: usize) -> bool {
    syllables > POLYSYLLABLE_THRESHOLD
}

fn has_silent_e(last: char, penultimate: char) -> bool {
    last == 'e' || (penultimate == 'e' && matches!(last, '.' | '!' | '?'))
}
