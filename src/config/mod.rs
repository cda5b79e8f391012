//! Configuration module for Readability
//!
//! This module handles:
//! - Project-level configuration (readability.toml)
//! - CLI defaults (format, metric, echo)
//! - Reader age policy

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, AgeConfig, CliDefaults, ProjectConfig, CONFIG_FILENAME,
    EXAMPLE_CONFIG,
};
