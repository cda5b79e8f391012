//! Pattern-based tokenizer
//!
//! Derives the three structural counts every formula needs:
//!
//! - **Words**: maximal runs of Latin or Greek letters, digits, apostrophes
//!   or commas (`[a-zA-Zα-ωΑ-Ω0-9',]+`), counted match by match.
//! - **Sentences**: segments between `.`, `!` and `?`. A terminator at the
//!   very end of the text closes the last sentence instead of opening a new
//!   one.
//! - **Characters**: every non-whitespace character, punctuation included.

use crate::error::{ReadabilityError, ReadabilityResult};
use regex::Regex;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"[a-zA-Zα-ωΑ-Ω0-9',]+").expect("valid regex"))
}

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Structural counts produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenCounts {
    pub words: usize,
    pub sentences: usize,
    pub characters: usize,
}

/// Count maximal runs matching the word pattern.
#[must_use]
pub fn count_words(text: &str) -> usize {
    word_pattern().find_iter(text).count()
}

/// Count sentences by splitting on `.`, `!` and `?`.
///
/// Empty segments between consecutive terminators still count (`"Wait..."`
/// is three segments before the trailing one is dropped).
pub fn count_sentences(text: &str) -> ReadabilityResult<usize> {
    let trimmed = text.trim();
    let Some(last) = trimmed.chars().last() else {
        return Err(ReadabilityError::EmptyText);
    };

    let segments = trimmed.split(SENTENCE_TERMINATORS).count();
    if SENTENCE_TERMINATORS.contains(&last) {
        Ok(segments - 1)
    } else {
        Ok(segments)
    }
}

/// Count non-whitespace characters.
#[must_use]
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Whitespace-delimited tokens, trailing punctuation kept.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Run all three counters, rejecting text that would leave a formula
/// without a denominator.
pub fn tokenize(text: &str) -> ReadabilityResult<TokenCounts> {
    let sentences = count_sentences(text)?;
    let words = count_words(text);
    if words == 0 || sentences == 0 {
        return Err(ReadabilityError::EmptyText);
    }

    Ok(TokenCounts {
        words,
        sentences,
        characters: count_characters(text),
    })
}
