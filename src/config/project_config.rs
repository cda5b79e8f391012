//! Project-level configuration support
//!
//! Loads configuration from `readability.toml` in the working directory,
//! or from an explicit path given with `--config`.
//!
//! # Configuration Format
//!
//! ```toml
//! # readability.toml
//!
//! [defaults]
//! format = "text"     # text, json, markdown
//! metric = "all"      # ARI, FK, SMOG, CL, all
//! echo_text = false
//!
//! [age]
//! clamp = true        # false keeps ages below 5 for very easy texts
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::scoring::AgePolicy;

/// Default config file name
pub const CONFIG_FILENAME: &str = "readability.toml";

/// Example config written by `readability init`
pub const EXAMPLE_CONFIG: &str = r#"# Readability Configuration

[defaults]
# Output format: text, json, markdown
format = "text"

# Score to report: ARI, FK, SMOG, CL, all
metric = "all"

# Print the analyzed text before the report
echo_text = false

[age]
# Clamp estimated reader ages to 5..=22.
# Set to false to keep the unclamped ceil(score) + 5 rule.
clamp = true
"#;

/// Project-level configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub defaults: CliDefaults,

    #[serde(default)]
    pub age: AgeConfig,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Default metric selection (ARI, FK, SMOG, CL, all)
    #[serde(default)]
    pub metric: Option<String>,

    /// Print the analyzed text before the report
    #[serde(default)]
    pub echo_text: Option<bool>,
}

/// Reader age settings
#[derive(Debug, Clone, Deserialize)]
pub struct AgeConfig {
    #[serde(default = "default_clamp")]
    pub clamp: bool,
}

fn default_clamp() -> bool {
    true
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            clamp: default_clamp(),
        }
    }
}

impl AgeConfig {
    pub fn policy(&self) -> AgePolicy {
        if self.clamp {
            AgePolicy::Clamped
        } else {
            AgePolicy::Unclamped
        }
    }
}

/// Load `readability.toml` from `dir`, falling back to defaults when the
/// file is missing or malformed.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILENAME);
    if !toml_path.exists() {
        debug!("No project config found, using defaults");
        return ProjectConfig::default();
    }

    match load_config_file(&toml_path) {
        Ok(config) => {
            debug!("Loaded project config from {}", toml_path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {:#}", toml_path.display(), e);
            ProjectConfig::default()
        }
    }
}

/// Load configuration from an explicit TOML file. Errors are returned, not
/// swallowed.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}
