//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates a statistics table and a score table, suitable for pull request
//! comments or documentation review notes.

use crate::models::ReadabilityReport;
use crate::scoring::MetricSelection;
use anyhow::Result;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &ReadabilityReport, selection: MetricSelection) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_statistics(report));
    md.push('\n');
    md.push_str(&render_scores(report, selection));

    Ok(md)
}

fn render_header(report: &ReadabilityReport) -> String {
    match &report.source {
        Some(source) => format!("# Readability Report: `{}`\n", source),
        None => "# Readability Report\n".to_string(),
    }
}

fn render_statistics(report: &ReadabilityReport) -> String {
    let stats = &report.statistics;
    let mut md = String::from("## Statistics\n\n| Statistic | Count |\n|-----------|------:|\n");
    for (label, value) in [
        ("Words", stats.words),
        ("Sentences", stats.sentences),
        ("Characters", stats.characters),
        ("Syllables", stats.syllables),
        ("Polysyllables", stats.polysyllables),
    ] {
        md.push_str(&format!("| {} | {} |\n", label, value));
    }
    md
}

fn render_scores(report: &ReadabilityReport, selection: MetricSelection) -> String {
    let mut md =
        String::from("## Scores\n\n| Metric | Score | Reader age |\n|--------|------:|-----------:|\n");
    for metric in selection.metrics() {
        let score = report.scores.get(metric);
        md.push_str(&format!(
            "| {} ({}) | {:.2} | {} |\n",
            metric.name(),
            metric.code(),
            score.score,
            score.age
        ));
    }

    if selection == MetricSelection::All {
        md.push_str(&format!(
            "\n**Average reader age:** {:.2}\n",
            report.scores.average_age()
        ));
    }
    md
}
