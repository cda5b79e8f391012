//! Readability scoring
//!
//! Applies the four published formulas to a [`TextStatistics`] record and
//! maps every score to an estimated reader age.
//!
//! # Formulas
//!
//! ```text
//! ARI  = 4.71 × (characters / words) + 0.5 × (words / sentences) − 21.43
//! FK   = 0.39 × (words / sentences) + 11.8 × (syllables / words) − 15.59
//! SMOG = 1.043 × √(polysyllables × 30 / sentences) + 3.1291
//! CL   = 0.0588 × L − 0.296 × S − 15.8
//!        L = characters / words × 100, S = sentences / words × 100
//! ```
//!
//! # Reader age
//!
//! ```text
//! age = 22                 if score ≥ 14
//!     = ⌈score⌉ + 5        otherwise
//! ```
//!
//! Clamped to 5..=22 unless [`AgePolicy::Unclamped`] is requested.

mod age;
mod formulas;

pub use age::{age_for_score, raw_age, AgePolicy, MAX_AGE, MIN_AGE};
pub use formulas::{ari, coleman_liau, flesch_kincaid, score, smog};

use crate::error::{ReadabilityError, ReadabilityResult};
use crate::models::TextStatistics;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four supported readability metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "ARI")]
    Ari,
    #[serde(rename = "FK")]
    FleschKincaid,
    #[serde(rename = "SMOG")]
    Smog,
    #[serde(rename = "CL")]
    ColemanLiau,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Ari,
        Metric::FleschKincaid,
        Metric::Smog,
        Metric::ColemanLiau,
    ];

    /// Short code used on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Metric::Ari => "ARI",
            Metric::FleschKincaid => "FK",
            Metric::Smog => "SMOG",
            Metric::ColemanLiau => "CL",
        }
    }

    /// Full display name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Ari => "Automated Readability Index",
            Metric::FleschKincaid => "Flesch–Kincaid readability tests",
            Metric::Smog => "Simple Measure of Gobbledygook",
            Metric::ColemanLiau => "Coleman–Liau index",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ARI" => Ok(Metric::Ari),
            "FK" => Ok(Metric::FleschKincaid),
            "SMOG" => Ok(Metric::Smog),
            "CL" => Ok(Metric::ColemanLiau),
            _ => Err(anyhow::anyhow!(
                "Unknown metric '{}'. Valid metrics: ARI, FK, SMOG, CL",
                s
            )),
        }
    }
}

/// Which scores the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricSelection {
    #[default]
    All,
    Single(Metric),
}

impl MetricSelection {
    pub fn metrics(&self) -> Vec<Metric> {
        match self {
            MetricSelection::All => Metric::ALL.to_vec(),
            MetricSelection::Single(metric) => vec![*metric],
        }
    }
}

impl FromStr for MetricSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(MetricSelection::All);
        }
        s.parse::<Metric>().map(MetricSelection::Single).map_err(|_| {
            anyhow::anyhow!(
                "Unknown metric '{}'. Valid choices: ARI, FK, SMOG, CL, all",
                s
            )
        })
    }
}

impl std::fmt::Display for MetricSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricSelection::All => write!(f, "all"),
            MetricSelection::Single(metric) => write!(f, "{}", metric),
        }
    }
}

/// A raw score paired with its estimated reader age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub score: f64,
    pub age: i32,
}

impl MetricScore {
    pub fn new(score: f64, policy: AgePolicy) -> Self {
        Self {
            score,
            age: age_for_score(score, policy),
        }
    }
}

/// All four scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub ari: MetricScore,
    pub fk: MetricScore,
    pub smog: MetricScore,
    pub cl: MetricScore,
}

impl ScoreSet {
    /// Compute every metric from `stats`.
    pub fn compute(stats: &TextStatistics, policy: AgePolicy) -> ReadabilityResult<Self> {
        Ok(Self {
            ari: MetricScore::new(ari(stats)?, policy),
            fk: MetricScore::new(flesch_kincaid(stats)?, policy),
            smog: MetricScore::new(smog(stats)?, policy),
            cl: MetricScore::new(coleman_liau(stats)?, policy),
        })
    }

    pub fn get(&self, metric: Metric) -> MetricScore {
        match metric {
            Metric::Ari => self.ari,
            Metric::FleschKincaid => self.fk,
            Metric::Smog => self.smog,
            Metric::ColemanLiau => self.cl,
        }
    }

    /// Mean of the four estimated ages
    pub fn average_age(&self) -> f64 {
        let total: i32 = Metric::ALL.iter().map(|m| self.get(*m).age).sum();
        f64::from(total) / Metric::ALL.len() as f64
    }
}

pub(crate) fn require_nonzero(
    metric: Metric,
    count: usize,
    denominator: &'static str,
) -> ReadabilityResult<f64> {
    if count == 0 {
        return Err(ReadabilityError::DivisionByZero {
            metric,
            denominator,
        });
    }
    Ok(count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_stats() -> TextStatistics {
        TextStatistics {
            words: 7,
            sentences: 2,
            characters: 24,
            syllables: 7,
            polysyllables: 0,
        }
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!("ARI".parse::<Metric>().unwrap(), Metric::Ari);
        assert_eq!("fk".parse::<Metric>().unwrap(), Metric::FleschKincaid);
        assert_eq!("Smog".parse::<Metric>().unwrap(), Metric::Smog);
        assert_eq!("CL".parse::<Metric>().unwrap(), Metric::ColemanLiau);
        assert!("flesch".parse::<Metric>().is_err());
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!(
            "all".parse::<MetricSelection>().unwrap(),
            MetricSelection::All
        );
        assert_eq!(
            "ALL".parse::<MetricSelection>().unwrap(),
            MetricSelection::All
        );
        assert_eq!(
            "SMOG".parse::<MetricSelection>().unwrap(),
            MetricSelection::Single(Metric::Smog)
        );
        assert!("none".parse::<MetricSelection>().is_err());
        assert_eq!(MetricSelection::All.metrics().len(), 4);
        assert_eq!(
            MetricSelection::Single(Metric::Ari).metrics(),
            vec![Metric::Ari]
        );
    }

    #[test]
    fn test_compute_score_set() {
        let scores = ScoreSet::compute(&cat_stats(), AgePolicy::Clamped).unwrap();
        assert!((scores.ari.score - -3.531_428_571_428_571).abs() < 1e-6);
        assert!((scores.fk.score - -2.425).abs() < 1e-6);
        assert!((scores.smog.score - 3.1291).abs() < 1e-6);
        assert!((scores.cl.score - -4.097_142_857_142_857).abs() < 1e-6);

        assert_eq!(scores.ari.age, 5);
        assert_eq!(scores.fk.age, 5);
        assert_eq!(scores.smog.age, 9);
        assert_eq!(scores.cl.age, 5);
        assert!((scores.average_age() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_unclamped_ages() {
        let scores = ScoreSet::compute(&cat_stats(), AgePolicy::Unclamped).unwrap();
        // ceil(-3.53) + 5, ceil(-2.425) + 5, ceil(3.13) + 5, ceil(-4.10) + 5
        assert_eq!(scores.ari.age, 2);
        assert_eq!(scores.fk.age, 3);
        assert_eq!(scores.smog.age, 9);
        assert_eq!(scores.cl.age, 1);
    }

    #[test]
    fn test_compute_rejects_zero_counts() {
        let stats = TextStatistics::default();
        assert!(matches!(
            ScoreSet::compute(&stats, AgePolicy::Clamped),
            Err(ReadabilityError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_get_matches_fields() {
        let scores = ScoreSet::compute(&cat_stats(), AgePolicy::Clamped).unwrap();
        assert_eq!(scores.get(Metric::Smog), scores.smog);
        assert_eq!(scores.get(Metric::ColemanLiau), scores.cl);
    }
}
