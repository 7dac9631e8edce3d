//! TOML configuration and logging initialization.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};
use crate::seed::SeedVolumes;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedVolumes,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: every setting has a default, so the
    /// tool runs without any configuration present.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Initialize the tracing subscriber from the `[logging]` section.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "wardbook.db".into(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let config = Config::load("/definitely/not/a/real/path.toml").unwrap();
        assert_eq!(config.database.path, "wardbook.db");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.seed.doctors, 10);
    }

    #[test]
    fn parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "registry.db"

            [logging]
            level = "debug"
            format = "json"

            [seed]
            doctors = 3
            patients = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path, "registry.db");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.seed.doctors, 3);
        assert_eq!(config.seed.patients, 7);
        // Fields absent from [seed] keep their defaults.
        assert_eq!(config.seed.nurses, 15);
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.database.path, "wardbook.db");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn validate_rejects_empty_database_path() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = ""
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_logging_format() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "info"
            format = "xml"
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
