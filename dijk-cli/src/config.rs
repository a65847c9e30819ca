//! dijk configuration loading from `.dijkrc.toml`.
//!
//! Configuration is optional - dijk uses sensible defaults if no config
//! file exists in the working directory. Command-line flags override
//! anything set here.
//!
//! # Example Configuration
//!
//! ```toml
//! [output]
//! format = "table"
//! color = true
//!
//! [animation]
//! delay_ms = 500
//! ```

use serde::Deserialize;
use std::path::Path;

/// Root configuration structure loaded from `.dijkrc.toml`.
///
/// All sections are optional and default when not specified.
#[derive(Debug, Deserialize, Default)]
pub struct DijkConfig {
    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Animation preferences for the step-wise run.
    #[serde(default)]
    pub animation: AnimationSettings,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g. `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format for reports.
    ///
    /// Valid values: `table`, `json`, `text`. Default: `table`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

/// Animation preferences.
#[derive(Debug, Deserialize, Default)]
pub struct AnimationSettings {
    /// Delay between animated algorithm steps, in milliseconds.
    ///
    /// Clamped to 100-1000. Default: 500.
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

/// Fastest and slowest permitted animation delays, in milliseconds.
pub const MIN_DELAY_MS: u64 = 100;
pub const MAX_DELAY_MS: u64 = 1000;

/// Default animation delay.
pub const DEFAULT_DELAY_MS: u64 = 500;

impl DijkConfig {
    /// Load configuration from `.dijkrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns
    /// defaults. Parse errors are logged as warnings but don't fail.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".dijkrc.toml");
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse .dijkrc.toml: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read .dijkrc.toml: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Animation delay in milliseconds, clamped to the permitted range.
    pub fn delay_ms(&self) -> u64 {
        self.animation
            .delay_ms
            .unwrap_or(DEFAULT_DELAY_MS)
            .clamp(MIN_DELAY_MS, MAX_DELAY_MS)
    }
}

/// Clamp an arbitrary delay into the permitted range.
pub fn clamp_delay(delay_ms: u64) -> u64 {
    delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}
