//! Configuration resolution.
//!
//! Precedence, first hit wins:
//! 1. explicit path (CLI `--config`)
//! 2. path named by `DTN_NOISE_CONFIG`
//! 3. `<config_dir>/dtn/noise_analysis.toml`, then `noise_analysis.json`
//! 4. built-in defaults
//!
//! An explicit or environment path that does not exist is an error. A missing
//! XDG file falls through to the defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use dtn_common::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::load::load_overrides;
use crate::noise::{NoiseAnalysisConfig, NoiseAnalysisOverrides};
use crate::CONFIG_ENV_VAR;

/// File names probed in the XDG config directory, in order.
pub const XDG_FILE_NAMES: [&str; 2] = ["noise_analysis.toml", "noise_analysis.json"];

/// Candidate locations for an override file.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub explicit: Option<PathBuf>,
    pub env: Option<PathBuf>,
    pub xdg_dir: Option<PathBuf>,
}

impl ConfigPaths {
    /// Paths from the process environment plus an optional explicit path.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            env: std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            xdg_dir: dirs::config_dir().map(|d| d.join("dtn")),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ConfigSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Xdg(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Env(p) | ConfigSource::Xdg(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "explicit:{}", p.display()),
            ConfigSource::Env(p) => write!(f, "env:{}", p.display()),
            ConfigSource::Xdg(p) => write!(f, "xdg:{}", p.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// A validated config and the source it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: NoiseAnalysisConfig,
    pub source: ConfigSource,
}

/// Locate the override file, without reading it.
pub fn locate(paths: &ConfigPaths) -> Result<ConfigSource> {
    if let Some(path) = &paths.explicit {
        return require_exists(path, "--config").map(|_| ConfigSource::Explicit(path.clone()));
    }
    if let Some(path) = &paths.env {
        return require_exists(path, CONFIG_ENV_VAR).map(|_| ConfigSource::Env(path.clone()));
    }
    if let Some(dir) = &paths.xdg_dir {
        for name in XDG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Ok(ConfigSource::Xdg(candidate));
            }
        }
        debug!(dir = %dir.display(), "no override file in config dir");
    }
    Ok(ConfigSource::Defaults)
}

fn require_exists(path: &Path, origin: &str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "config file from {} not found: {}",
            origin,
            path.display()
        )))
    }
}

/// Resolve the configuration, layering `cli` overrides over the file.
pub fn resolve_config(paths: &ConfigPaths, cli: NoiseAnalysisOverrides) -> Result<ResolvedConfig> {
    let source = locate(paths)?;
    let file = match source.path() {
        Some(path) => load_overrides(path)?,
        None => NoiseAnalysisOverrides::default(),
    };
    let config = NoiseAnalysisConfig::new(file.merge(cli))?;
    info!(source = %source, "resolved noise analysis config");
    Ok(ResolvedConfig { config, source })
}
