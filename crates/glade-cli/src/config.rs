use std::path::Path;

use glade_catalog::CatalogSet;
use glade_world::GenerationConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml in {path}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid catalog json in {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Generation seed. Absent means a random seed per run.
    pub seed: Option<u64>,
    pub logging: LoggingSection,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl CliConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path_str,
            source,
        })
    }
}

/// Load a catalog set from a JSON file, for runs with real art assets.
pub fn load_catalogs<P: AsRef<Path>>(path: P) -> Result<CatalogSet, ConfigError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path_str.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path_str,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let toml_str = r#"
            seed = 12345

            [logging]
            level = "debug"

            [generation]
            grid_length = 80
            grid_height = 60

            [generation.elevation]
            coverage = [0.6, 0.3, 0.2]

            [generation.props]
            tree_coverage = 0.1
        "#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.generation.grid_length, 80);
        assert_eq!(config.generation.grid_height, 60);
        assert!((config.generation.elevation.coverage[2] - 0.2).abs() < f32::EPSILON);
        assert!((config.generation.props.tree_coverage - 0.1).abs() < f32::EPSILON);
        // Unset sections keep their defaults.
        assert_eq!(config.generation.grass.coverage, [0.6, 0.4]);
        assert_eq!(config.generation.elevation.candidate_rolls, 5);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.generation.grid_length, 50);
    }
}
