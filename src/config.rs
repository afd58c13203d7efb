use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub products_path: String,
    pub listings_path: String,
    pub output_path: String,
    /// Highest expected cost at which a non-certain listing is still accepted.
    pub error_tolerance: f64,
    pub workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            products_path: "products.txt".into(),
            listings_path: "listings.txt".into(),
            output_path: "results.txt".into(),
            error_tolerance: 0.01,
            workers: 4,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.error_tolerance) {
            return Err(ConfigError::Invalid(format!(
                "error_tolerance must be within [0, 1], got {}",
                self.error_tolerance
            )));
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        Ok(())
    }
}

/// Loads the config at `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str::<AppConfig>(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Config {} not found, using defaults", path.display());
            AppConfig::default()
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    config.validate()?;
    Ok(config)
}
