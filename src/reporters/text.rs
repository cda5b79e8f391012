//! Text (terminal) reporter

use crate::models::ReadabilityReport;
use crate::scoring::{MetricScore, MetricSelection};
use anyhow::Result;
use console::style;

/// Render report as terminal output
pub fn render(report: &ReadabilityReport, selection: MetricSelection) -> Result<String> {
    let mut out = String::new();

    if let Some(source) = &report.source {
        out.push_str(&format!("{}\n", style(source).bold()));
    }

    let stats = &report.statistics;
    out.push_str(&format!("Words: {}\n", stats.words));
    out.push_str(&format!("Sentences: {}\n", stats.sentences));
    out.push_str(&format!("Characters: {}\n", stats.characters));
    out.push_str(&format!("Syllables: {}\n", stats.syllables));
    out.push_str(&format!("Polysyllables: {}\n", stats.polysyllables));
    out.push('\n');

    for metric in selection.metrics() {
        out.push_str(&score_line(metric.name(), report.scores.get(metric)));
    }

    if selection == MetricSelection::All {
        out.push_str(&format!(
            "\nThis text should be understood in average by {:.2}-year-olds.\n",
            report.scores.average_age()
        ));
    }

    Ok(out)
}

fn score_line(name: &str, score: MetricScore) -> String {
    format!(
        "{}: {:.2} (about {}-year-olds)\n",
        name, score.score, score.age
    )
}
