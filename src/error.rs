//! Error types for the readability engine

use crate::scoring::Metric;
use thiserror::Error;

/// Errors raised while extracting statistics or computing scores
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadabilityError {
    /// The text is blank, or it contains no countable words or sentences.
    #[error("Text is empty: no words or sentences to analyze")]
    EmptyText,

    /// A score formula would divide by a zero count.
    #[error("Cannot compute {metric}: {denominator} count is zero")]
    DivisionByZero {
        metric: Metric,
        denominator: &'static str,
    },
}

pub type ReadabilityResult<T> = Result<T, ReadabilityError>;
