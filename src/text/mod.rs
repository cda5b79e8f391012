//! Text segmentation and syllable estimation
//!
//! The two leaf components of the engine:
//! - `tokenizer` - words, sentences and non-space characters
//! - `syllables` - vowel-run syllable heuristic for a single token

pub mod syllables;
pub mod tokenizer;

pub use syllables::{count_vowel_runs, estimate_syllables, is_polysyllabic_count, is_polysyllable};
pub use tokenizer::{
    count_characters, count_sentences, count_words, tokenize, tokens, TokenCounts,
};
