pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::ClientConfig;
pub use config::FileConfig;

pub use adapters::http::HttpAnalysisService;
pub use core::cards::{CardRegistry, Zone};
pub use core::coordinator::{AnalysisView, RequestCoordinator};
pub use core::debounce::DebounceGate;
pub use core::options::OptionsUpdate;
pub use core::session::AnalysisSession;
pub use domain::model::{
    AnalysisOptions, CalculationRequest, Card, Decision, HandAnalysis, HandProbabilities, Rank,
    ServiceInfo, Suit, WireCard,
};
pub use domain::ports::{AnalysisService, ConfigProvider};
pub use utils::error::{AssistError, Result};
