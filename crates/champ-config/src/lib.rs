//! # champ-config
//!
//! Layered configuration loading for Champollion using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHAMP_*` prefix, `__` as separator)
//! 2. Project-level `.champollion/config.toml`
//! 3. User-level `~/.config/champollion/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CHAMP_BUILD__PARALLEL` -> `build.parallel`,
//! `CHAMP_OUTPUT__PRETTY` -> `output.pretty`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use champ_config::ChampConfig;
//! use champ_parser::BuildOptions;
//!
//! let config = ChampConfig::load_with_dotenv().expect("config");
//! let options = BuildOptions::from(&config.build);
//! ```

mod build;
mod error;
mod output;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use output::OutputConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChampConfig {
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ChampConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] if a source is malformed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the working directory, then every other source.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".champollion/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CHAMP_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("champollion").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChampConfig::default();
        assert!(!config.build.parallel);
        assert!(!config.build.follow_links);
        assert!(config.build.warn_on_collisions);
        assert!(config.output.pretty);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ChampConfig = ChampConfig::figment().extract()?;
            assert_eq!(config, ChampConfig::default());
            Ok(())
        });
    }
}
