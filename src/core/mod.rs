pub mod cards;
pub mod coordinator;
pub mod debounce;
pub mod options;
pub mod session;

pub use crate::domain::model::{AnalysisOptions, Card, HandAnalysis, Rank, Suit};
pub use crate::domain::ports::{AnalysisService, ConfigProvider};
pub use crate::utils::error::Result;
