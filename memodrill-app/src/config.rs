use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use memodrill_csv::DEFAULT_MAX_BACKUPS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub open_questions: bool,
    pub viewer: Option<String>,
    pub max_reviews: Option<usize>,
    pub max_backups: usize,
    /// tracing filter, e.g. "memodrill_csv=debug"
    pub log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open_questions: false,
            viewer: None,
            max_reviews: None,
            max_backups: DEFAULT_MAX_BACKUPS,
            log: None,
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "memodrill", "memodrill").map(|pd| pd.config_dir().join("config.toml"))
}

/// An explicit path must exist; the default one is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Config::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
}
