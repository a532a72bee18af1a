use crate::config::{DEFAULT_QUIET_PERIOD_MS, DEFAULT_TIMEOUT_SECONDS};
use crate::core::options::OptionsUpdate;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File-based configuration, an alternative to the CLI flags:
///
/// ```toml
/// [service]
/// endpoint = "http://localhost:8080/api/poker"
/// timeout_seconds = 10
///
/// [analysis]
/// opponents = 3
/// small_blind = 5.0
///
/// [debounce]
/// quiet_period_ms = 300
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub service: ServiceConfig,
    pub analysis: Option<AnalysisDefaults>,
    pub debounce: Option<DebounceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDefaults {
    pub opponents: Option<u32>,
    pub small_blind: Option<f64>,
    pub accumulated_bet: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    pub quiet_period_ms: Option<u64>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn analysis_defaults(&self) -> OptionsUpdate {
        match &self.analysis {
            Some(defaults) => OptionsUpdate {
                opponents: defaults.opponents,
                small_blind: defaults.small_blind,
                accumulated_bet: defaults.accumulated_bet,
            },
            None => OptionsUpdate::default(),
        }
    }
}

impl ConfigProvider for FileConfig {
    fn endpoint(&self) -> &str {
        &self.service.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.service
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    fn quiet_period(&self) -> Duration {
        let quiet_ms = self
            .debounce
            .as_ref()
            .and_then(|d| d.quiet_period_ms)
            .unwrap_or(DEFAULT_QUIET_PERIOD_MS);
        Duration::from_millis(quiet_ms)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.endpoint", &self.service.endpoint)?;
        if let Some(timeout) = self.service.timeout_seconds {
            validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }
        if let Some(quiet_ms) = self.debounce.as_ref().and_then(|d| d.quiet_period_ms) {
            validate_positive_number("debounce.quiet_period_ms", quiet_ms, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config_round_trip() {
        let file = write_config(
            r#"
[service]
endpoint = "http://localhost:9000/api/poker"
timeout_seconds = 5

[analysis]
opponents = 4
small_blind = 2.5

[debounce]
quiet_period_ms = 150
"#,
        );

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint(), "http://localhost:9000/api/poker");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.quiet_period(), Duration::from_millis(150));

        let defaults = config.analysis_defaults();
        assert_eq!(defaults.opponents, Some(4));
        assert_eq!(defaults.small_blind, Some(2.5));
        assert_eq!(defaults.accumulated_bet, None);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let file = write_config(
            r#"
[service]
endpoint = "http://localhost:8080/api/poker"
"#,
        );

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)
        );
        assert_eq!(
            config.quiet_period(),
            Duration::from_millis(DEFAULT_QUIET_PERIOD_MS)
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let file = write_config(
            r#"
[service]
endpoint = "not a url"
"#,
        );
        assert!(FileConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("[service\nendpoint = ");
        assert!(FileConfig::from_file(file.path()).is_err());
    }
}
