//! The four readability formulas

use super::{require_nonzero, Metric};
use crate::error::ReadabilityResult;
use crate::models::TextStatistics;

/// Automated Readability Index
pub fn ari(stats: &TextStatistics) -> ReadabilityResult<f64> {
    let words = require_nonzero(Metric::Ari, stats.words, "word")?;
    let sentences = require_nonzero(Metric::Ari, stats.sentences, "sentence")?;
    Ok(4.71 * (stats.characters as f64 / words) + 0.5 * (words / sentences) - 21.43)
}

/// Flesch–Kincaid grade level
pub fn flesch_kincaid(stats: &TextStatistics) -> ReadabilityResult<f64> {
    let words = require_nonzero(Metric::FleschKincaid, stats.words, "word")?;
    let sentences = require_nonzero(Metric::FleschKincaid, stats.sentences, "sentence")?;
    Ok(0.39 * (words / sentences) + 11.8 * (stats.syllables as f64 / words) - 15.59)
}

/// Simple Measure of Gobbledygook
///
/// Only divides by sentences; a text with no polysyllables scores the
/// constant term.
pub fn smog(stats: &TextStatistics) -> ReadabilityResult<f64> {
    let sentences = require_nonzero(Metric::Smog, stats.sentences, "sentence")?;
    Ok(1.043 * (stats.polysyllables as f64 * (30.0 / sentences)).sqrt() + 3.1291)
}

/// Coleman–Liau index
pub fn coleman_liau(stats: &TextStatistics) -> ReadabilityResult<f64> {
    let words = require_nonzero(Metric::ColemanLiau, stats.words, "word")?;
    let sentences = require_nonzero(Metric::ColemanLiau, stats.sentences, "sentence")?;
    let letters_per_100 = (stats.characters as f64 / words) * 100.0;
    let sentences_per_100 = (sentences / words) * 100.0;
    Ok(0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8)
}

/// Compute a single metric by kind.
pub fn score(metric: Metric, stats: &TextStatistics) -> ReadabilityResult<f64> {
    match metric {
        Metric::Ari => ari(stats),
        Metric::FleschKincaid => flesch_kincaid(stats),
        Metric::Smog => smog(stats),
        Metric::ColemanLiau => coleman_liau(stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadabilityError;

    const EPS: f64 = 1e-6;

    fn stats(
        words: usize,
        sentences: usize,
        characters: usize,
        syllables: usize,
        polysyllables: usize,
    ) -> TextStatistics {
        TextStatistics {
            words,
            sentences,
            characters,
            syllables,
            polysyllables,
        }
    }

    #[test]
    fn test_ari() {
        // 4.71 * 5 + 0.5 * 10 - 21.43
        let s = stats(100, 10, 500, 150, 10);
        assert!((ari(&s).unwrap() - 7.12).abs() < EPS);
    }

    #[test]
    fn test_flesch_kincaid() {
        // 0.39 * 10 + 11.8 * 1.5 - 15.59
        let s = stats(100, 10, 500, 150, 10);
        assert!((flesch_kincaid(&s).unwrap() - 6.01).abs() < EPS);
    }

    #[test]
    fn test_smog() {
        // 1.043 * sqrt(10 * 3) + 3.1291
        let s = stats(100, 10, 500, 150, 10);
        let expected = 1.043 * 30f64.sqrt() + 3.1291;
        assert!((smog(&s).unwrap() - expected).abs() < EPS);
    }

    #[test]
    fn test_smog_without_polysyllables() {
        let s = stats(7, 2, 24, 7, 0);
        assert!((smog(&s).unwrap() - 3.1291).abs() < EPS);
    }

    #[test]
    fn test_coleman_liau() {
        // L = 500, S = 10 -> 0.0588 * 500 - 0.296 * 10 - 15.8
        let s = stats(100, 10, 500, 150, 10);
        assert!((coleman_liau(&s).unwrap() - 10.64).abs() < EPS);
    }

    #[test]
    fn test_score_dispatch() {
        let s = stats(100, 10, 500, 150, 10);
        assert_eq!(score(Metric::Ari, &s).unwrap(), ari(&s).unwrap());
        assert_eq!(score(Metric::Smog, &s).unwrap(), smog(&s).unwrap());
    }

    #[test]
    fn test_zero_words_is_division_error() {
        let s = stats(0, 3, 10, 0, 0);
        assert_eq!(
            ari(&s),
            Err(ReadabilityError::DivisionByZero {
                metric: Metric::Ari,
                denominator: "word",
            })
        );
        assert!(flesch_kincaid(&s).is_err());
        assert!(coleman_liau(&s).is_err());
        // SMOG never divides by words
        assert!(smog(&s).is_ok());
    }

    #[test]
    fn test_zero_sentences_is_division_error() {
        let s = stats(5, 0, 20, 5, 0);
        for metric in Metric::ALL {
            assert_eq!(
                score(metric, &s),
                Err(ReadabilityError::DivisionByZero {
                    metric,
                    denominator: "sentence",
                })
            );
        }
    }
}
