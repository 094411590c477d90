//! Configuration for phoenix (stored in ~/.config/phoenix/config.toml)
//!
//! ```toml
//! [graph]
//! kind = "undirected-weighted"
//! allow_loops = false
//! algorithm = "bfs"
//! ```

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PhoenixError, Result};
use crate::load::MAX_VERTICES;
use crate::{bail_invalid, bail_usage};

pub use types::{GraphConfig, PhoenixConfig};

const CONFIG_DIR: &str = "phoenix";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PHOENIX_CONFIG_DIR";

impl PhoenixConfig {
    /// Default location, honouring `PHOENIX_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PhoenixError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit
    /// file is a usage error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    bail_usage!(format!("config file not found: {}", explicit.display()));
                }
                explicit.to_path_buf()
            }
            None => {
                let default = Self::default_path()?;
                if !default.exists() {
                    tracing::debug!(path = %default.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            PhoenixError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: PhoenixConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                PhoenixError::Other(format!(
                    "failed to create config directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PhoenixError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        match self.graph.vertices {
            Some(0) => bail_invalid!("graph.vertices", "must be at least 1"),
            Some(n) if n > MAX_VERTICES => {
                bail_invalid!("graph.vertices", format!("must be at most {MAX_VERTICES}"))
            }
            _ => {}
        }
        Ok(())
    }
}
