//! Sensor configuration loader.

use std::path::Path;

use sensor_core::SensorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for sensor parameters from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load sensor parameters from a TOML file.
    ///
    /// Keys may use either snake_case (`sensor_distance`) or the PascalCase
    /// parameter names (`SensorDistance`). Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or names a
    /// default balloon that is not a stock icon.
    pub fn load(path: &Path) -> LoadResult<SensorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse sensor parameters from TOML text.
    pub fn parse(content: &str) -> LoadResult<SensorConfig> {
        let config: SensorConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sensor config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid sensor config: {}", e))?;

        Ok(config)
    }
}
