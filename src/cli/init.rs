//! Init command - write an example readability.toml

use anyhow::{Context, Result};
use console::style;
use readability::config::{CONFIG_FILENAME, EXAMPLE_CONFIG};
use std::path::{Path, PathBuf};

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let config_path = write_example_config(path)?;
    println!(
        "{} Config at {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}

/// Write the example config into `dir` unless one already exists.
fn write_example_config(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        tracing::info!("{} already exists, leaving it untouched", config_path.display());
        return Ok(config_path);
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
