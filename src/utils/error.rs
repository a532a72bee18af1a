use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("analysis request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analysis service returned HTTP {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("malformed analysis payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("response belongs to a superseded request")]
    Superseded,

    #[error("request was cancelled")]
    Cancelled,

    #[error("card import rejected: {reason}")]
    InvalidImport { reason: String },

    #[error("unrecognized card notation: {0}")]
    CardParse(String),

    #[error("invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("configuration file parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AssistError {
    /// Cancelled and superseded outcomes are expected churn while the user
    /// is editing cards; they are discarded without reaching the UI.
    pub fn is_silent(&self) -> bool {
        matches!(self, AssistError::Cancelled | AssistError::Superseded)
    }
}

pub type Result<T> = std::result::Result<T, AssistError>;
