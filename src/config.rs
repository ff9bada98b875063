use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PublishError, Result};

const CONFIG_FILE_NAME: &str = "npub.toml";

/// Represents the complete configuration for npub.
///
/// Every section and key is optional; missing values fall back to the
/// behavior of a plain `npub` run (release from `master`, push to `origin`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub branch: BranchConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_release_branch() -> String {
    "master".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_access() -> String {
    "public".to_string()
}

fn default_precheck_script() -> String {
    "npub:precheck".to_string()
}

fn default_delay_secs() -> u64 {
    5
}

fn default_version_pattern() -> String {
    "v{version}".to_string()
}

/// Which branch releases are cut from and where they are pushed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchConfig {
    #[serde(default = "default_release_branch")]
    pub release: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        BranchConfig {
            release: default_release_branch(),
            remote: default_remote(),
        }
    }
}

/// Settings for the precheck, the confirmation pause and `npm publish`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    #[serde(default = "default_access")]
    pub access: String,

    #[serde(default = "default_precheck_script")]
    pub precheck_script: String,

    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            access: default_access(),
            precheck_script: default_precheck_script(),
            delay_secs: default_delay_secs(),
        }
    }
}

/// Naming of the release commit and tag. `{version}` is replaced by the new version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_version_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_version_pattern")]
    pub commit_pattern: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            tag_pattern: default_version_pattern(),
            commit_pattern: default_version_pattern(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `npub.toml` in the current directory
/// 3. `npub.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return load_from(Path::new(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return load_from(&local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join(CONFIG_FILE_NAME);
        if global.exists() {
            return load_from(&global);
        }
    }

    log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
    Ok(Config::default())
}

fn load_from(path: &Path) -> Result<Config> {
    log::debug!("loading config from {}", path.display());

    let config_str = fs::read_to_string(path).map_err(|e| {
        PublishError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| PublishError::config(format!("cannot parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.branch.release, "master");
        assert_eq!(config.branch.remote, "origin");
        assert_eq!(config.publish.access, "public");
        assert_eq!(config.publish.precheck_script, "npub:precheck");
        assert_eq!(config.publish.delay_secs, 5);
        assert_eq!(config.git.tag_pattern, "v{version}");
        assert_eq!(config.git.commit_pattern, "v{version}");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[branch]\nrelease = \"main\"\n").unwrap();
        assert_eq!(config.branch.release, "main");
        assert_eq!(config.branch.remote, "origin");
        assert_eq!(config.publish, PublishConfig::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
