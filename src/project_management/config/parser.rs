use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use tracing::debug;

use super::models::ModuleConfig;

pub const DEFAULT_CONFIG_FILE: &str = "modgen.yml";

/// Loads modgen.yml
pub struct ConfigParser;

impl ConfigParser {
    /// Load configuration for a project rooted at `root`.
    ///
    /// An explicit path must exist. Without one, `modgen.yml` under the root is
    /// read when present and defaults are used otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<ModuleConfig> {
        let path = match explicit {
            Some(path) => {
                let path = Self::resolve(root, path);
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                path
            }
            None => {
                let path = root.join(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    debug!(root = %root.display(), "no modgen.yml, using defaults");
                    return Ok(ModuleConfig::default());
                }
                path
            }
        };

        Self::parse_file(&path)
    }

    /// Parse a configuration file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ModuleConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");

        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn parse_str(content: &str) -> Result<ModuleConfig> {
        if content.trim().is_empty() {
            return Ok(ModuleConfig::default());
        }

        serde_yaml::from_str(content).context("Invalid modgen.yml")
    }

    fn resolve(root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}
