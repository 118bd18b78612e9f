//! Configuration loading and parsing for Curbcut
//!
//! Provides functionality to load and parse `curbcut.toml` configuration files.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::violation::Impact;

pub const CONFIG_FILENAME: &str = "curbcut.toml";

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["include", "exclude", "checks"];
const KNOWN_CHECKS_KEYS: &[&str] = &[
    "disabled",
    "impact",
    "aria",
    "structure",
    "image_alt",
    "link_text",
    "heading_order",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Invalid allowlist pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub checks: ChecksConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChecksConfig {
    pub disabled: Vec<String>,
    /// Per-check or per-violation-id impact overrides.
    #[serde(default)]
    pub impact: HashMap<String, Impact>,
    pub aria: Option<bool>,
    pub structure: Option<bool>,
    pub image_alt: ImageAltConfig,
    pub link_text: LinkTextConfig,
    pub heading_order: HeadingOrderConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageAltConfig {
    /// Attribute names that mark an image decorative.
    pub markers: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkTextConfig {
    /// Extra phrases treated as generic link text.
    pub words: Vec<String>,
    /// Regex patterns for link names that are never flagged.
    pub allowlist: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeadingOrderConfig {
    pub max_skip: Option<u32>,
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn load_config_with_warnings(path: &Path) -> Result<ConfigResult, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let warnings = detect_unknown_keys(&content);

    Ok(ConfigResult { config, warnings })
}

fn detect_unknown_keys(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => return warnings,
    };

    let known_top: HashSet<&str> = KNOWN_TOP_LEVEL_KEYS.iter().copied().collect();
    for key in table.keys() {
        if !known_top.contains(key.as_str()) {
            warnings.push(format!("Unknown config option: '{}'", key));
        }
    }

    if let Some(toml::Value::Table(checks)) = table.get("checks") {
        let known_checks: HashSet<&str> = KNOWN_CHECKS_KEYS.iter().copied().collect();
        for key in checks.keys() {
            if !known_checks.contains(key.as_str()) {
                warnings.push(format!("Unknown config option in [checks]: '{}'", key));
            }
        }
    }

    warnings
}

pub fn load_config_or_default(start_dir: &Path) -> Config {
    find_config_file(start_dir)
        .and_then(|path| load_config(&path).ok())
        .unwrap_or_default()
}

pub fn load_config_or_default_with_warnings(start_dir: &Path) -> ConfigResult {
    match find_config_file(start_dir) {
        Some(path) => load_config_with_warnings(&path).unwrap_or_default(),
        None => ConfigResult::default(),
    }
}
