//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `statskit.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stylesheet output settings.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the rendered stylesheet goes.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the generated CSS file.
    pub path: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `statskit.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("statskit.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup. Later keys win, so
    /// `RUST_LOG` takes precedence over `STATSKIT_LOG`.
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("STATSKIT_OUT") {
            self.output.path = val;
        }
        if let Some(val) = var("STATSKIT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.path.is_empty() {
            return Err(ConfigError::Validation(
                "output path must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "theme.css".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "themegen=info,statskit=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.output.path, "theme.css");
        assert_eq!(config.logging.filter, "themegen=info,statskit=info");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.path, "theme.css");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [output]
            path = 'assets/theme.css'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.path, "assets/theme.css");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.path, "theme.css");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.output.path, "theme.css");
    }

    #[test]
    fn should_override_fields_from_variables() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "STATSKIT_OUT" => Some("assets/site.css".to_string()),
            "STATSKIT_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.output.path, "assets/site.css");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_let_rust_log_win_over_statskit_log() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "STATSKIT_LOG" => Some("warn".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_keep_defaults_when_no_variables_are_set() {
        let mut config = Config::default();
        config.apply_overrides(|_| None);
        assert_eq!(config.output.path, "theme.css");
        assert_eq!(config.logging.filter, "themegen=info,statskit=info");
    }

    #[test]
    fn should_reject_empty_output_path() {
        let mut config = Config::default();
        config.output.path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
