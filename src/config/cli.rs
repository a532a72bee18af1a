use crate::config::{DEFAULT_ENDPOINT, DEFAULT_QUIET_PERIOD_MS, DEFAULT_TIMEOUT_SECONDS};
use crate::core::options::OptionsUpdate;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_number_range, validate_positive_number, validate_url, Validate};
use std::time::Duration;

#[derive(Debug, Clone, clap::Args)]
pub struct ClientConfig {
    /// Base URL of the poker analysis service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Quiet period in milliseconds before a burst of edits fires one request
    #[arg(long, default_value_t = DEFAULT_QUIET_PERIOD_MS)]
    pub quiet_period_ms: u64,

    /// Number of opponents at the table (1-9)
    #[arg(long, default_value_t = 3)]
    pub opponents: u32,

    /// Small blind amount
    #[arg(long, default_value_t = 5.0)]
    pub small_blind: f64,

    /// Chips already committed to the pot
    #[arg(long, default_value_t = 0.0)]
    pub accumulated_bet: f64,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ClientConfig {
    pub fn analysis_defaults(&self) -> OptionsUpdate {
        OptionsUpdate {
            opponents: Some(self.opponents),
            small_blind: Some(self.small_blind),
            accumulated_bet: Some(self.accumulated_bet),
        }
    }
}

impl ConfigProvider for ClientConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_positive_number("quiet_period_ms", self.quiet_period_ms, 1)?;
        validate_number_range("opponents", self.opponents, 1, 9)?;
        Ok(())
    }
}
