//! Readability - text statistics and readability scoring
//!
//! Extracts words, sentences, characters, syllables and polysyllables from
//! raw text, then computes the Automated Readability Index, Flesch–Kincaid,
//! SMOG and Coleman–Liau scores with an estimated reader age for each.
//!
//! ```rust,ignore
//! let report = readability::analyze("The cat sat. The dog ran fast!")?;
//! println!("FK: {:.2} (about {}-year-olds)", report.scores.fk.score, report.scores.fk.age);
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod scoring;
pub mod text;

pub use error::{ReadabilityError, ReadabilityResult};
pub use models::{ReadabilityReport, TextStatistics};
pub use pipeline::{analyze, analyze_batch, analyze_with, Document};
pub use scoring::{AgePolicy, Metric, MetricScore, MetricSelection, ScoreSet};
