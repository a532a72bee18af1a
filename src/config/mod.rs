#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::ClientConfig;
pub use toml_config::FileConfig;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/poker";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 300;
