//! Analyze command - load texts, score them, print the report

use anyhow::{Context, Result};
use console::style;
use readability::config::ProjectConfig;
use readability::reporters::{self, OutputFormat};
use readability::{analyze_batch, AgePolicy, Document, MetricSelection, ReadabilityReport};
use std::io::{BufRead, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use super::AnalyzeArgs;

const STDIN_PATH: &str = "-";

/// Settings after merging CLI flags over project config
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    selection: MetricSelection,
    echo: bool,
    policy: AgePolicy,
}

impl Settings {
    fn resolve(args: &AnalyzeArgs, config: &ProjectConfig) -> Result<Self> {
        let format = match args.format.as_deref().or(config.defaults.format.as_deref()) {
            Some(f) => OutputFormat::from_str(f)?,
            None => OutputFormat::default(),
        };
        let selection = match (args.metric, config.defaults.metric.as_deref()) {
            (Some(selection), _) => selection,
            (None, Some(m)) => MetricSelection::from_str(m)
                .with_context(|| "Invalid `metric` in [defaults] config")?,
            (None, None) => MetricSelection::default(),
        };
        let policy = if args.unclamped_ages {
            AgePolicy::Unclamped
        } else {
            config.age.policy()
        };

        Ok(Self {
            format,
            selection,
            echo: args.echo || config.defaults.echo_text.unwrap_or(false),
            policy,
        })
    }
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs, config: &ProjectConfig) -> Result<()> {
    if args.paths.is_empty() {
        anyhow::bail!("No input files. Run 'readability --help' for usage.");
    }
    let stdin_args = args
        .paths
        .iter()
        .filter(|p| p.as_os_str() == STDIN_PATH)
        .count();
    if stdin_args > 1 {
        anyhow::bail!("'-' (stdin) can only be given once");
    }
    if args.interactive && stdin_args > 0 {
        anyhow::bail!("--interactive reads the metric from stdin; pass the text as a file");
    }

    let mut settings = Settings::resolve(&args, config)?;
    debug!(?settings, "Resolved analyze settings");

    let documents = args
        .paths
        .iter()
        .map(|path| load_document(path))
        .collect::<Result<Vec<_>>>()?;
    info!("Loaded {} document(s)", documents.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if settings.echo && settings.format == OutputFormat::Text {
        for doc in &documents {
            writeln!(out, "{}", doc.text)?;
        }
    }

    if args.interactive {
        // Keep stdout parseable for machine-readable formats
        let mut stderr = std::io::stderr();
        let mut prompt_out: &mut dyn Write = if settings.format == OutputFormat::Text {
            &mut out
        } else {
            &mut stderr
        };
        let stdin = std::io::stdin();
        match prompt_for_selection(&mut stdin.lock(), &mut prompt_out)? {
            Some(selection) => settings.selection = selection,
            None => {
                writeln!(prompt_out, "Not valid choice.")?;
                return Ok(());
            }
        }
    }

    let mut reports: Vec<ReadabilityReport> = Vec::with_capacity(documents.len());
    let mut failures = 0usize;
    for (doc, result) in documents.iter().zip(analyze_batch(&documents, settings.policy)) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", style("error:").red().bold(), doc.source, e);
            }
        }
    }

    if !reports.is_empty() {
        let rendered = reporters::report_many(&reports, settings.format, settings.selection)?;
        match &args.output {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Report written to {}", path.display());
            }
            None => write!(out, "{}", rendered)?,
        }
    }
    out.flush()?;

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Read a file (or stdin for `-`), joining lines with single spaces.
fn load_document(path: &Path) -> Result<Document> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let source = if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    };
    Ok(Document::new(source, join_lines(&raw)))
}

fn join_lines(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        text.push_str(line);
        text.push(' ');
    }
    text
}

/// Ask which score to show. `None` means the answer was not a valid choice.
fn prompt_for_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<MetricSelection>> {
    writeln!(
        out,
        "Enter the score you want to calculate (ARI, FK, SMOG, CL, all):"
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer).context("Failed to read choice")?;
    Ok(MetricSelection::from_str(answer.trim()).ok())
}
