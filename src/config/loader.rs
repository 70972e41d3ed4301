//! Configuration file loading with precedence handling.

use crate::history::RowMetrics;
use crate::scroller::{LayoutParams, ScrollerConfig};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "VSCROLL_CONFIG";

/// Environment variable overriding the overscan.
pub const OVERSCAN_ENV_VAR: &str = "VSCROLL_OVERSCAN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, defaults are used.
/// Corresponds to `~/.config/vscroll/config.toml`:
///
/// ```toml
/// item_spacing = 1
/// overscan = 6
/// min_row_height = 2
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Space above the first row.
    #[serde(default)]
    pub top_padding: Option<u32>,

    /// Space below the last row.
    #[serde(default)]
    pub bottom_padding: Option<u32>,

    /// Space between consecutive rows.
    #[serde(default)]
    pub item_spacing: Option<u32>,

    /// Extra rows bound beyond the visible area.
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Row height assumed for pool sizing.
    #[serde(default)]
    pub fallback_row_height: Option<u32>,

    /// Smallest height a history row may have.
    #[serde(default)]
    pub min_row_height: Option<u32>,

    /// Added to the wrapped height of every history row.
    #[serde(default)]
    pub row_vertical_padding: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Space above the first row.
    pub top_padding: u32,
    /// Space below the last row.
    pub bottom_padding: u32,
    /// Space between consecutive rows.
    pub item_spacing: u32,
    /// Extra rows bound beyond the visible area.
    pub overscan: usize,
    /// Row height assumed for pool sizing.
    pub fallback_row_height: u32,
    /// Smallest history row height.
    pub min_row_height: u32,
    /// Padding added to every history row.
    pub row_vertical_padding: u32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    /// Scroller parameters for this config.
    pub fn scroller_config(&self) -> ScrollerConfig {
        ScrollerConfig::new(
            LayoutParams::new(self.top_padding, self.bottom_padding, self.item_spacing),
            self.overscan,
            self.fallback_row_height,
        )
    }

    /// History row sizing for this config.
    pub fn row_metrics(&self) -> RowMetrics {
        RowMetrics::new(self.min_row_height, self.row_vertical_padding)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let scroller = ScrollerConfig::terminal();
        let metrics = RowMetrics::terminal();
        Self {
            top_padding: scroller.layout.top_padding,
            bottom_padding: scroller.layout.bottom_padding,
            item_spacing: scroller.layout.item_spacing,
            overscan: scroller.overscan,
            fallback_row_height: scroller.fallback_row_height,
            min_row_height: metrics.min_row_height,
            row_vertical_padding: metrics.row_vertical_padding,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vscroll/vscroll.log` on Linux, the platform state
/// directory elsewhere, or `vscroll.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vscroll").join("vscroll.log")
    } else {
        PathBuf::from("vscroll.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/vscroll/config.toml` on Linux).
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/vscroll/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        top_padding: config.top_padding.unwrap_or(defaults.top_padding),
        bottom_padding: config.bottom_padding.unwrap_or(defaults.bottom_padding),
        item_spacing: config.item_spacing.unwrap_or(defaults.item_spacing),
        overscan: config.overscan.unwrap_or(defaults.overscan),
        fallback_row_height: config
            .fallback_row_height
            .unwrap_or(defaults.fallback_row_height),
        min_row_height: config.min_row_height.unwrap_or(defaults.min_row_height),
        row_vertical_padding: config
            .row_vertical_padding
            .unwrap_or(defaults.row_vertical_padding),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `VSCROLL_OVERSCAN`. A value that is not a non-negative integer is
/// logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(OVERSCAN_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(overscan) => config.overscan = overscan,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {OVERSCAN_ENV_VAR}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overscan_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(overscan) = overscan_override {
        config.overscan = overscan;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
