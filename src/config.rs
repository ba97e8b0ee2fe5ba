//! Settings loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Settings file given with `--config` (TOML)

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings could not be read or parsed.
#[derive(Error, Debug)]
#[error("config error: {message}")]
pub struct ConfigError {
    pub message: String,
}

/// Where each stage's logic lives, shown in the stage notices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StageLocations {
    /// Notion API integration
    pub collect: PathBuf,
    /// AI synthesis logic
    pub synthesize: PathBuf,
    /// Slide specs and brand assets
    pub generate: PathBuf,
}

impl Default for StageLocations {
    fn default() -> Self {
        Self {
            collect: PathBuf::from("scripts/notion/"),
            synthesize: PathBuf::from("scripts/analysis/"),
            generate: PathBuf::from("templates/"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub stages: StageLocations,
}

impl Settings {
    /// Load settings, layering the optional file over compiled defaults.
    ///
    /// The file is required when given and is always parsed as TOML.
    /// Keys it leaves out keep their default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("stages.collect", path_string(&defaults.stages.collect))
            .map_err(config_err)?
            .set_default(
                "stages.synthesize",
                path_string(&defaults.stages.synthesize),
            )
            .map_err(config_err)?
            .set_default("stages.generate", path_string(&defaults.stages.generate))
            .map_err(config_err)?;

        if let Some(path) = path {
            tracing::debug!("loading settings from {}", path.display());
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn config_err(e: config::ConfigError) -> ConfigError {
    ConfigError {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.stages.collect, PathBuf::from("scripts/notion/"));
    }

    #[test]
    fn given_missing_file_when_loading_then_config_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/review-synth.toml")))
            .expect_err("missing file must fail");
        assert!(err.to_string().starts_with("config error:"));
    }
}
