//! Configuration types for sdash.
//!
//! [`Config::load`] layers, in order: the embedded defaults, a TOML file, and
//! `SDASH_*` environment variables (`__` separates sections, e.g.
//! `SDASH_DASHBOARD__REFRESH_SECS=2`). Without an explicit path the file is
//! `~/.config/sdash/config.toml`, created with the defaults if it does not
//! yet exist. [`Config::defaults`] returns the defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[sources]
log_file     = "events.log"
captures_dir = "alerts"

[dashboard]
refresh_secs      = 5
feed_len          = 15
capture_cap       = 6
min_capture_bytes = 500

[ui]
theme = "default"
"#;

const ENV_PREFIX: &str = "SDASH";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[sources]`: where the sensor daemon writes.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_captures_dir")]
    pub captures_dir: PathBuf,
}

fn default_log_file() -> PathBuf { PathBuf::from("events.log") }
fn default_captures_dir() -> PathBuf { PathBuf::from("alerts") }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            captures_dir: default_captures_dir(),
        }
    }
}

/// `[dashboard]`: refresh cadence and how much of each view to show.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Events shown in the feed.
    #[serde(default = "default_feed_len")]
    pub feed_len: usize,
    /// Captures shown; validation stops once this many have passed.
    #[serde(default = "default_capture_cap")]
    pub capture_cap: usize,
    /// Captures of this size or smaller are treated as corrupt.
    #[serde(default = "default_min_capture_bytes")]
    pub min_capture_bytes: u64,
}

fn default_refresh_secs() -> u64 { 5 }
fn default_feed_len() -> usize { 15 }
fn default_capture_cap() -> usize { 6 }
fn default_min_capture_bytes() -> u64 { 500 }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            feed_len: default_feed_len(),
            capture_cap: default_capture_cap(),
            min_capture_bytes: default_min_capture_bytes(),
        }
    }
}

impl DashboardConfig {
    /// Refresh interval, never shorter than one second.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs.max(1))
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: default_theme() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// With `Some(path)` the file must exist. With `None` the per-user file is
    /// used and created with the defaults if missing.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => {
                let p = config_path();
                if !p.exists() {
                    if let Some(parent) = p.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&p, DEFAULT_CONFIG.trim_start())?;
                }
                (p, false)
            }
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("sdash")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
