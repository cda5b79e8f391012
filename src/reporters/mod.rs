//! Output reporters for readability results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output, one line per score
//! - `json` - Machine-readable JSON (always every score)
//! - `markdown` - GitHub-flavored Markdown tables

mod json;
mod markdown;
mod text;

use crate::models::ReadabilityReport;
use crate::scoring::MetricSelection;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render one report in the given format
pub fn report(
    report: &ReadabilityReport,
    format: OutputFormat,
    selection: MetricSelection,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, selection),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report, selection),
    }
}

/// Render several reports. JSON output becomes an array when there is more
/// than one report.
pub fn report_many(
    reports: &[ReadabilityReport],
    format: OutputFormat,
    selection: MetricSelection,
) -> Result<String> {
    match (format, reports) {
        (_, [single]) => report(single, format, selection),
        (OutputFormat::Json, _) => json::render_many(reports),
        _ => {
            let rendered = reports
                .iter()
                .map(|r| report(r, format, selection))
                .collect::<Result<Vec<_>>>()?;
            Ok(rendered.join("\n"))
        }
    }
}
