//! Configuration system for anypp.
//!
//! Loads config from:
//! 1. Global: ~/.config/anypp/config.toml
//! 2. Per-project: .anypp/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [convert]
//! banners = true
//! targets_from_pickpoints = ["anyscript-pointcloud", "anyscript-declarations"]
//! targets_from_anyscript = ["pickpoints"]
//!
//! [log]
//! level = "warn"
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default targets for a pick-points source.
pub const DEFAULT_PICKPOINTS_TARGETS: &[&str] = &["anyscript-pointcloud", "anyscript-declarations"];

/// Default targets for an AnyScript source.
pub const DEFAULT_ANYSCRIPT_TARGETS: &[&str] = &["pickpoints"];

/// Convert command configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ConvertConfig {
    /// Print a banner above each section when writing several targets.
    pub banners: Option<bool>,
    /// Writer formats used when a pick-points file is converted.
    pub targets_from_pickpoints: Option<Vec<String>>,
    /// Writer formats used when AnyScript text is converted.
    pub targets_from_anyscript: Option<Vec<String>>,
}

impl ConvertConfig {
    pub fn banners(&self) -> bool {
        self.banners.unwrap_or(true)
    }

    /// Default writer formats for a source format.
    pub fn targets_for(&self, source_format: &str) -> Vec<String> {
        let configured = match source_format {
            "pickpoints" => self.targets_from_pickpoints.as_ref(),
            "anyscript" => self.targets_from_anyscript.as_ref(),
            _ => None,
        };
        match configured {
            Some(targets) => targets.clone(),
            None => default_targets(source_format)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn default_targets(source_format: &str) -> &'static [&'static str] {
    match source_format {
        "pickpoints" => DEFAULT_PICKPOINTS_TARGETS,
        "anyscript" => DEFAULT_ANYSCRIPT_TARGETS,
        _ => &[],
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Level used when neither `-v` nor `RUST_LOG` is given.
    pub level: Option<String>,
}

/// A config file that exists but could not be parsed.
#[derive(Debug)]
pub struct ConfigError {
    pub path: PathBuf,
    pub error: toml::de::Error,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error.message())
    }
}

impl std::error::Error for ConfigError {}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AnyppConfig {
    pub convert: ConvertConfig,
    pub log: LogConfig,
}

impl AnyppConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/anypp/config.toml,
    /// then merges with per-project config from .anypp/config.toml.
    /// Malformed files are skipped and returned alongside the config.
    pub fn load(root: &Path) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        let global_path = Self::global_config_path();
        let project_path = root.join(".anypp").join("config.toml");

        // Per-project config comes last so it overrides global
        for path in global_path.iter().chain([&project_path]) {
            match Self::load_file(path) {
                Ok(Some(file)) => config = config.merge(file),
                Ok(None) => {}
                Err(err) => errors.push(err),
            }
        }

        (config, errors)
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("anypp").join("config.toml"))
    }

    /// Load config from a file path. A missing file is `Ok(None)`.
    fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Ok(None);
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|error| ConfigError {
                path: path.to_path_buf(),
                error,
            })
    }

    /// Merge another config into this one. Values set in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            convert: ConvertConfig {
                banners: other.convert.banners.or(self.convert.banners),
                targets_from_pickpoints: other
                    .convert
                    .targets_from_pickpoints
                    .or(self.convert.targets_from_pickpoints),
                targets_from_anyscript: other
                    .convert
                    .targets_from_anyscript
                    .or(self.convert.targets_from_anyscript),
            },
            log: LogConfig {
                level: other.log.level.or(self.log.level),
            },
        }
    }
}
