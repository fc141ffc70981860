use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Reachability fetch parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total time allowed for the GET, redirects included.
    pub timeout_secs: u64,
    /// Redirect hops followed before the fetch is treated as failed.
    pub max_redirects: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            max_redirects: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/phishcheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishcheckConfig {
    /// Scheme the CLI prepends when the operator omits `http://` / `https://`.
    pub default_scheme: String,
    /// Fetch settings; built-in defaults are used when the section is missing.
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Default for PhishcheckConfig {
    fn default() -> Self {
        Self {
            default_scheme: "http".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

/// Smallest fetch timeout accepted; curl treats a zero timeout as "never".
pub const MIN_TIMEOUT_SECS: u64 = 1;

impl PhishcheckConfig {
    /// Fetch options for the validator. `timeout_secs` below
    /// [`MIN_TIMEOUT_SECS`] is raised to it.
    pub fn fetch_options(&self) -> FetchOptions {
        let timeout_secs = if self.fetch.timeout_secs < MIN_TIMEOUT_SECS {
            tracing::warn!(
                "fetch.timeout_secs={} too small, using {}",
                self.fetch.timeout_secs,
                MIN_TIMEOUT_SECS
            );
            MIN_TIMEOUT_SECS
        } else {
            self.fetch.timeout_secs
        };
        FetchOptions {
            timeout: Duration::from_secs(timeout_secs),
            max_redirects: self.fetch.max_redirects,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishcheckConfig> {
    let path = config_path()?;
    load_from(&path)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_from(path: &Path) -> Result<PhishcheckConfig> {
    if !path.exists() {
        let default_cfg = PhishcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PhishcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
