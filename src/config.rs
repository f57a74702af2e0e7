use crate::analysis::{analyzer::DEFAULT_LATENCY_MS, Latency};
use crate::preprocessing::Cleaner;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path of an optional TOML file layered over the defaults.
pub const CONFIG_PATH_VAR: &str = "TRUTHBOT_CONFIG";
pub const LATENCY_VAR: &str = "TRUTHBOT_LATENCY_MS";
pub const SEED_VAR: &str = "TRUTHBOT_SEED";
pub const MAX_INPUT_LENGTH_VAR: &str = "TRUTHBOT_MAX_INPUT_LENGTH";
pub const LOG_FILTER_VAR: &str = "TRUTHBOT_LOG";

const MAX_LATENCY_MS: u64 = 60_000;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Simulated backend round-trip before a verdict is returned.
    pub latency_ms: u64,
    /// Pins the confidence jitter; entropy-seeded when absent.
    pub seed: Option<u64>,
    pub max_input_length: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub filter: String,
    pub ansi: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            seed: None,
            max_input_length: Cleaner::DEFAULT_MAX_LENGTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: true,
        }
    }
}

impl AnalysisConfig {
    pub fn latency(&self) -> Latency {
        Latency::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl AppConfig {
    /// Defaults, then `.env`, then the optional TOML file, then environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TRUTHBOT_*` overrides resolved through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(LATENCY_VAR) {
            self.analysis.latency_ms = parse_var(LATENCY_VAR, &raw)?;
        }

        if let Some(raw) = lookup(SEED_VAR) {
            self.analysis.seed = Some(parse_var(SEED_VAR, &raw)?);
        }

        if let Some(raw) = lookup(MAX_INPUT_LENGTH_VAR) {
            self.analysis.max_input_length = parse_var(MAX_INPUT_LENGTH_VAR, &raw)?;
        }

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            self.logging.filter = filter;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.max_input_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "analysis.max_input_length".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.analysis.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::InvalidValue {
                key: "analysis.latency_ms".to_string(),
                reason: format!("must be at most {} ms", MAX_LATENCY_MS),
            });
        }

        Ok(())
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("{:?} ({})", raw, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_demo_behaviour() {
        let config = AppConfig::default();

        assert_eq!(config.analysis.latency_ms, 2000);
        assert_eq!(config.analysis.seed, None);
        assert_eq!(config.analysis.max_input_length, 10_000);
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\nlatency_ms = 0\nseed = 42").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();

        assert_eq!(config.analysis.latency_ms, 0);
        assert_eq!(config.analysis.seed, Some(42));
        assert_eq!(config.analysis.max_input_length, 10_000);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis\nlatency_ms = ").unwrap();

        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            AppConfig::from_file(dir.path().join("absent.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn environment_overrides_apply() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (LATENCY_VAR, "250"),
                (SEED_VAR, " 7 "),
                (LOG_FILTER_VAR, "truthbot_lib=debug"),
            ]))
            .unwrap();

        assert_eq!(config.analysis.latency_ms, 250);
        assert_eq!(config.analysis.seed, Some(7));
        assert_eq!(config.logging.filter, "truthbot_lib=debug");
        assert_eq!(config.analysis.latency(), Latency::from_millis(250));
    }

    #[test]
    fn unparsable_override_names_the_variable() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(SEED_VAR, "lucky")]))
            .unwrap_err();

        assert!(err.to_string().contains(SEED_VAR));
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let mut config = AppConfig::default();
        config.analysis.max_input_length = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.analysis.latency_ms = 120_000;
        assert!(config.validate().is_err());
    }
}
