// Configuration module

mod render;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use render::RenderConfig;

use crate::error::RenderError;
use crate::logging::LoggingConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory rendered images are stored under
    #[serde(default = "default_images_root")]
    pub images_root: PathBuf,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_root: default_images_root(),
            render: RenderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_images_root() -> PathBuf {
    PathBuf::from("data/images")
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, RenderError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| RenderError::InvalidConfig(e.to_string()))?;

        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                RenderError::InvalidConfig(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        let config: Config = serde_yaml::from_str(&substituted)
            .map_err(|e| RenderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            RenderError::InvalidConfig(format!("Failed to read config file: {}", e))
        })?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.images_root.as_os_str().is_empty() {
            return Err(RenderError::InvalidConfig(
                "images_root cannot be empty".to_string(),
            ));
        }
        self.render.validate()
    }
}
