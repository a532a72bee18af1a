use crate::domain::model::{CalculationRequest, Decision, HandAnalysis, ServiceInfo};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The remote analysis backend. The probability math lives behind this
/// boundary; the client only cares about success, failure, and latency.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &CalculationRequest) -> Result<HandAnalysis>;
    async fn decide(&self, request: &CalculationRequest) -> Result<Decision>;
    async fn service_info(&self) -> Result<ServiceInfo>;
}

pub trait ConfigProvider: Send + Sync {
    /// Base URL of the analysis service, e.g. `http://localhost:8080/api/poker`.
    fn endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    /// Quiet period the debounce gate waits for before firing a request.
    fn quiet_period(&self) -> Duration;
}
