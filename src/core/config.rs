//! Optional `gith-ub.toml` configuration.
//!
//! Lookup order for the file: explicit path (`--config`), then
//! `GITH_UB_CONFIG`, then `gith-ub.toml` in the working directory. No file
//! means defaults. `GITH_UB_SEED` overrides the file's seed.

use crate::core::error::GithubError;
use crate::plugins::coder::ContemplationLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "gith-ub.toml";
pub const CONFIG_ENV: &str = "GITH_UB_CONFIG";
pub const SEED_ENV: &str = "GITH_UB_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    /// Default contemplation level for `analyze`.
    pub level: ContemplationLevel,
    /// Seed for reproducible draws.
    pub seed: Option<u64>,
    /// Length announced by the meditation guide.
    pub meditation_minutes: u32,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            level: ContemplationLevel::Deep,
            seed: None,
            meditation_minutes: 5,
        }
    }
}

impl GithubConfig {
    /// Resolves and loads the configuration, then applies env overrides.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self, GithubError> {
        let mut config = match resolve_config_path(explicit, working_dir) {
            Some(path) => load_config_file(&path)?,
            None => GithubConfig::default(),
        };

        if let Ok(raw) = env::var(SEED_ENV) {
            let seed = raw.trim().parse::<u64>().map_err(|e| {
                GithubError::ConfigError(format!("{} must be an unsigned integer: {}", SEED_ENV, e))
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

fn resolve_config_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    let local = working_dir.join(CONFIG_FILE_NAME);
    local.exists().then_some(local)
}

/// Reads one config file. An explicitly named file that is missing is an error.
pub fn load_config_file(path: &Path) -> Result<GithubConfig, GithubError> {
    let content = fs::read_to_string(path).map_err(|e| {
        GithubError::ConfigError(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config: GithubConfig = toml::from_str(&content)
        .map_err(|e| GithubError::ConfigError(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}
