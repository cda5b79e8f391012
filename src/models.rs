//! Core data models for readability analysis
//!
//! These records are produced once per analysis call and handed to the
//! presentation layer unchanged.

use crate::scoring::ScoreSet;
use serde::{Deserialize, Serialize};

/// The five base counts every readability formula is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStatistics {
    pub words: usize,
    pub sentences: usize,
    pub characters: usize,
    pub syllables: usize,
    pub polysyllables: usize,
}

impl TextStatistics {
    /// Average non-space characters per word
    pub fn characters_per_word(&self) -> f64 {
        self.characters as f64 / self.words as f64
    }

    /// Average words per sentence
    pub fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    /// Average syllables per word
    pub fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }
}

/// Full result of analyzing one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Where the text came from (file path, `<stdin>`), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub statistics: TextStatistics,
    pub scores: ScoreSet,
}

impl ReadabilityReport {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        let stats = TextStatistics {
            words: 8,
            sentences: 2,
            characters: 32,
            syllables: 12,
            polysyllables: 1,
        };
        assert_eq!(stats.characters_per_word(), 4.0);
        assert_eq!(stats.words_per_sentence(), 4.0);
        assert_eq!(stats.syllables_per_word(), 1.5);
    }

    #[test]
    fn test_statistics_serialize_field_names() {
        let stats = TextStatistics {
            words: 7,
            sentences: 2,
            characters: 24,
            syllables: 7,
            polysyllables: 0,
        };
        let json = serde_json::to_value(stats).expect("serialize stats");
        assert_eq!(json["words"], 7);
        assert_eq!(json["polysyllables"], 0);
    }
}
