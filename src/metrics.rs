//! Metrics aggregation
//!
//! Combines the tokenizer counts with per-token syllable estimates into a
//! single [`TextStatistics`] record.

use crate::error::ReadabilityResult;
use crate::models::TextStatistics;
use crate::text::{estimate_syllables, is_polysyllabic_count, tokenize, tokens};

/// Extract the five base statistics from `text`.
///
/// Fails with [`ReadabilityError::EmptyText`](crate::error::ReadabilityError::EmptyText)
/// before any syllables are counted if the text has no words or sentences.
pub fn collect(text: &str) -> ReadabilityResult<TextStatistics> {
    let counts = tokenize(text)?;

    let (syllables, polysyllables) = tokens(text)
        .map(estimate_syllables)
        .fold((0, 0), |(total, poly), n| {
            (total + n, poly + usize::from(is_polysyllabic_count(n)))
        });

    Ok(TextStatistics {
        words: counts.words,
        sentences: counts.sentences,
        characters: counts.characters,
        syllables,
        polysyllables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadabilityError;

    const SAMPLE: &str = "Readability is the ease with which a reader can understand a written text. \
        In natural language, the readability of text depends on its content and its presentation. \
        Researchers have used various factors to measure readability!";

    #[test]
    fn test_collect_simple_text() {
        let stats = collect("The cat sat. The dog ran fast!").unwrap();
        assert_eq!(
            stats,
            TextStatistics {
                words: 7,
                sentences: 2,
                characters: 24,
                syllables: 7,
                polysyllables: 0,
            }
        );
    }

    #[test]
    fn test_collect_counts_polysyllables() {
        let stats = collect("Communication is beautiful.").unwrap();
        // communication 5, is 1, beautiful. 3
        assert_eq!(stats.words, 3);
        assert_eq!(stats.syllables, 9);
        assert_eq!(stats.polysyllables, 2);
    }

    #[test]
    fn test_collect_polysyllables_match_token_rule() {
        let stats = collect(SAMPLE).unwrap();
        let expected = tokens(SAMPLE)
            .filter(|t| crate::text::is_polysyllable(t))
            .count();
        assert_eq!(stats.polysyllables, expected);
    }

    #[test]
    fn test_collect_invariants_on_prose() {
        let stats = collect(SAMPLE).unwrap();
        assert!(stats.words >= 1);
        assert_eq!(stats.sentences, 3);
        assert!(stats.syllables >= stats.words);
        assert!(stats.polysyllables <= stats.words);
    }

    #[test]
    fn test_collect_is_deterministic() {
        assert_eq!(collect(SAMPLE).unwrap(), collect(SAMPLE).unwrap());
    }

    #[test]
    fn test_collect_vowelless_tokens_can_undercount() {
        // "hmm" and "brr" contribute no syllables
        let stats = collect("hmm brr ok.").unwrap();
        assert_eq!(stats.words, 3);
        assert_eq!(stats.syllables, 1);
        assert!(stats.syllables < stats.words);
    }

    #[test]
    fn test_collect_empty_text() {
        assert_eq!(collect(""), Err(ReadabilityError::EmptyText));
        assert_eq!(collect("\n\n\t"), Err(ReadabilityError::EmptyText));
        assert_eq!(collect("?!"), Err(ReadabilityError::EmptyText));
    }
}
