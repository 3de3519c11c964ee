use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::CmdframeError;

const CONFIG_DIR: &str = "cmdframe";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to surface when the file was unusable
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location, falling back to defaults
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load the config at `path`
///
/// A missing file is not an error. A file that cannot be read or parsed
/// yields the default config and a warning describing what went wrong.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}: {}", path.display(), e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, CmdframeError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
