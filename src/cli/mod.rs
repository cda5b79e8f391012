//! CLI command definitions and handlers

mod analyze;
mod init;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use readability::config::{self, ProjectConfig};
use readability::MetricSelection;
use std::path::PathBuf;

/// Parse a metric selection (ARI, FK, SMOG, CL, all), case-insensitive
fn parse_selection(s: &str) -> Result<MetricSelection, String> {
    s.parse::<MetricSelection>().map_err(|e| e.to_string())
}

/// Readability - estimate how hard a text is to read
#[derive(Parser, Debug)]
#[command(name = "readability")]
#[command(
    version,
    about = "Readability scores for plain text: ARI, Flesch–Kincaid, SMOG and Coleman–Liau",
    long_about = "Counts words, sentences, characters, syllables and polysyllables, then \
computes four readability scores and the approximate age of a reader who \
would understand the text.\n\n\
Run without a subcommand to analyze files directly:\n  \
readability essay.txt",
    after_help = "\
Examples:
  readability essay.txt                    All four scores for a file
  readability essay.txt --metric FK        Only Flesch–Kincaid
  readability a.txt b.txt --format json    JSON array, files analyzed in parallel
  cat essay.txt | readability -            Read from stdin
  readability essay.txt --interactive      Prompt for the score to show
  readability init                         Write an example readability.toml"
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Config file (default: ./readability.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more text files
    #[command(after_help = "\
Examples:
  readability analyze essay.txt                      All scores, text output
  readability analyze essay.txt --metric SMOG        Only SMOG
  readability analyze essay.txt -f markdown -o r.md  Markdown report to a file
  readability analyze essay.txt --echo               Print the text before the report
  readability analyze essay.txt --unclamped-ages     Do not clamp ages to 5..=22")]
    Analyze(AnalyzeArgs),

    /// Write an example readability.toml config file
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Text files to analyze (`-` reads stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Score to report: ARI, FK, SMOG, CL, all
    #[arg(long, short = 'm', value_parser = parse_selection)]
    pub metric: Option<MetricSelection>,

    /// Output format: text, json, markdown (or md)
    #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the analyzed text before the report
    #[arg(long)]
    pub echo: bool,

    /// Ask which score to show on stdin
    #[arg(long, short = 'i', conflicts_with = "metric")]
    pub interactive: bool,

    /// Report unclamped reader ages (may fall below 5)
    #[arg(long)]
    pub unclamped_ages: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => init::run(&path),
        Some(Commands::Analyze(args)) => {
            let config = resolve_config(cli.config.as_deref())?;
            analyze::run(args, &config)
        }
        None => {
            let config = resolve_config(cli.config.as_deref())?;
            analyze::run(cli.analyze, &config)
        }
    }
}

/// An explicit `--config` must load; the implicit one falls back to defaults.
fn resolve_config(explicit: Option<&std::path::Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => Ok(config::load_project_config(std::path::Path::new("."))),
    }
}
