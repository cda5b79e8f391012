//! JSON reporter
//!
//! Outputs the full report as pretty-printed JSON. Every score is included
//! regardless of the metric selection; consumers pick what they need.

use crate::models::ReadabilityReport;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ReadabilityReport,
    average_age: f64,
}

impl<'a> From<&'a ReadabilityReport> for JsonReport<'a> {
    fn from(report: &'a ReadabilityReport) -> Self {
        Self {
            report,
            average_age: report.scores.average_age(),
        }
    }
}

/// Render report as JSON
pub fn render(report: &ReadabilityReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
}

/// Render several reports as a JSON array
pub fn render_many(reports: &[ReadabilityReport]) -> Result<String> {
    let items: Vec<JsonReport<'_>> = reports.iter().map(JsonReport::from).collect();
    Ok(serde_json::to_string_pretty(&items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let json_str = render(&test_report()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["statistics"]["words"], 7);
        assert_eq!(parsed["statistics"]["sentences"], 2);
        assert_eq!(parsed["scores"]["smog"]["age"], 9);
        assert_eq!(parsed["average_age"], 6.0);
        assert!(parsed.get("source").is_none());
    }

    #[test]
    fn test_json_roundtrips_into_report() {
        let report = test_report().with_source("cat.txt");
        let json_str = render(&report).expect("render JSON");
        let parsed: ReadabilityReport = serde_json::from_str(&json_str).expect("parse report");
        assert_eq!(parsed.source.as_deref(), Some("cat.txt"));
        assert_eq!(parsed.statistics, report.statistics);
    }

    #[test]
    fn test_json_render_many_empty() {
        let json_str = render_many(&[]).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed.as_array().expect("array").len(), 0);
    }
}
