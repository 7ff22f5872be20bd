//! Handles the configuration of chorus.
//!
//! this module is responsible for parsing the Chorus.toml file and layering
//! environment variables and cli arguments on top of it.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use std::{path::PathBuf, str::FromStr};

pub static DEFAULT_CONFIG: &str = include_str!("../Chorus.toml");

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// How the catalog is set up at startup
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from the config file, environment variables, and CLI arguments.
    ///
    /// The environment variables are prefixed with `CHORUS_`, and use `__` to
    /// separate the section from the key (e.g. `CHORUS_LOGGING__LOG_LEVEL`).
    ///
    /// # Arguments
    ///
    /// * `config` - Path to the config file.
    /// * `seed` - Overrides `catalog.seed` when set.
    /// * `log_level` - Overrides `logging.log_level` when set.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config file is not found or if the config file is
    /// invalid.
    #[inline]
    pub fn init(
        config: PathBuf,
        seed: Option<PathBuf>,
        log_level: Option<log::LevelFilter>,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(config))
            .add_source(
                Environment::with_prefix("CHORUS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Some(seed) = seed {
            settings.catalog.seed = Some(seed);
        }

        if let Some(seed) = settings.catalog.seed.as_mut() {
            *seed = shellexpand::tilde(&seed.to_string_lossy())
                .into_owned()
                .into();
        }

        if let Some(log_level) = log_level {
            settings.logging.log_level = log_level;
        }

        Ok(settings)
    }

    /// Get the (default) path to the config file.
    /// If the config file does not exist at this path, it will be created with the default config.
    ///
    /// See [`crate::get_config_dir`] for more information about where this default path is located.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system config directory (e.g., `~/.config` on linux) could not be found, or if the config file was missing and could not be created.
    #[inline]
    pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
        let config_dir = crate::get_config_dir()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)?;
        }
        let config_file = config_dir.join("Chorus.toml");

        if !config_file.exists() {
            std::fs::write(&config_file, DEFAULT_CONFIG)?;
        }

        Ok(config_file)
    }
}

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogSettings {
    /// A command script to replay against the catalog when it is created.
    /// Default is unset.
    #[serde(default)]
    pub seed: Option<PathBuf>,
    /// Whether to print each command replayed from the seed script.
    /// Default is false.
    #[serde(default)]
    pub echo: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    /// What level of logging to use.
    /// Default is "info".
    #[serde(default = "default_log_level")]
    #[serde(deserialize_with = "de_log_level")]
    pub log_level: log::LevelFilter,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn de_log_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(log::LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}
