use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".sheet-rename";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default report format for rename runs: "summary" or "table"
    #[serde(default = "default_report_format")]
    pub report_format: String,

    /// Default template document format: "xlsx" or "csv"
    #[serde(default = "default_template_format")]
    pub template_format: String,

    /// Default file type selection: "ies", "pdf", "gos" or "all"
    #[serde(default = "default_file_type")]
    pub file_type: String,

    /// Default log level: "error", "warn", "info" or "debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            report_format: default_report_format(),
            template_format: default_template_format(),
            file_type: default_file_type(),
            log_level: default_log_level(),
            use_color: None,
        }
    }
}

fn default_report_format() -> String {
    "summary".to_string()
}

fn default_template_format() -> String {
    "xlsx".to_string()
}

fn default_file_type() -> String {
    "all".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from .sheet-rename/config.toml if it exists
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from_dir(&cwd)
    }

    /// Load config from `<dir>/.sheet-rename/config.toml`, or defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
