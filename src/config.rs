use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::Increment;
use crate::error::{Result, VerbumpError};

/// Represents the complete configuration for verbump.
///
/// Carries the selected commit convention, the current project version and
/// optional overrides for the increment classifier.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Commit convention used for classification and the style commands
    #[serde(default = "default_name")]
    pub name: String,

    /// Current project version, used when `--current-version` is absent
    #[serde(default)]
    pub version: Option<String>,

    /// Overrides for the increment classifier
    #[serde(default)]
    pub bump: BumpConfig,
}

/// Returns the default convention name.
fn default_name() -> String {
    "conventional".to_string()
}

/// Overrides for the increment classifier.
///
/// When present, `pattern` and `map` replace the selected convention's
/// classifier inputs. Keywords missing from `map` still classify as PATCH.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct BumpConfig {
    /// Replacement classifier pattern (regular expression)
    #[serde(default)]
    pub pattern: Option<String>,

    /// Replacement matched keyword → increment entries
    #[serde(default)]
    pub map: HashMap<String, Increment>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: default_name(),
            version: None,
            bump: BumpConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `verbump.toml` in current directory
/// 3. `.verbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./verbump.toml").exists() {
        fs::read_to_string("./verbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".verbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| VerbumpError::config(e.to_string()))?;
    Ok(config)
}
