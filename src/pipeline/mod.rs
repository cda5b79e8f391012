//! Analysis pipeline
//!
//! Orchestrates one readability analysis:
//! 1. Tokenize and count words, sentences, characters
//! 2. Estimate syllables and polysyllables per token
//! 3. Apply the four formulas
//! 4. Map each score to a reader age
//!
//! Every step is pure, so independent documents are analyzed in parallel
//! by [`analyze_batch`].

use rayon::prelude::*;
use tracing::debug;

use crate::error::ReadabilityResult;
use crate::metrics;
use crate::models::ReadabilityReport;
use crate::scoring::{AgePolicy, ScoreSet};

/// A named text handed to [`analyze_batch`]
#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// Analyze `text` with clamped reader ages.
pub fn analyze(text: &str) -> ReadabilityResult<ReadabilityReport> {
    analyze_with(text, AgePolicy::default())
}

/// Analyze `text` using the given age policy.
pub fn analyze_with(text: &str, policy: AgePolicy) -> ReadabilityResult<ReadabilityReport> {
    let statistics = metrics::collect(text)?;
    debug!(
        words = statistics.words,
        sentences = statistics.sentences,
        characters = statistics.characters,
        syllables = statistics.syllables,
        polysyllables = statistics.polysyllables,
        "Collected text statistics"
    );

    let scores = ScoreSet::compute(&statistics, policy)?;
    Ok(ReadabilityReport {
        source: None,
        statistics,
        scores,
    })
}

/// Analyze many documents in parallel.
///
/// Results come back in input order; one failing document does not affect
/// the others.
pub fn analyze_batch(
    documents: &[Document],
    policy: AgePolicy,
) -> Vec<ReadabilityResult<ReadabilityReport>> {
    debug!("Analyzing {} documents", documents.len());
    documents
        .par_iter()
        .map(|doc| analyze_with(&doc.text, policy).map(|r| r.with_source(doc.source.clone())))
        .collect()
}
