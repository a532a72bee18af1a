use crate::domain::model::{CalculationRequest, Decision, HandAnalysis, ServiceInfo};
use crate::domain::ports::{AnalysisService, ConfigProvider};
use crate::utils::error::{AssistError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// reqwest-backed implementation of [`AnalysisService`]. One instance is
/// constructed at startup and shared by reference; dropping the future of an
/// in-flight call aborts the underlying HTTP request.
pub struct HttpAnalysisService {
    client: Client,
    base_url: String,
}

impl HttpAnalysisService {
    pub fn new(config: &impl ConfigProvider) -> Result<HttpAnalysisService> {
        validate_url("endpoint", config.endpoint())?;
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(HttpAnalysisService {
            client,
            base_url: config.endpoint().trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("analysis service responded with {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        // Decoded from text so a body the service got wrong surfaces as a
        // payload error, not a transport one.
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &CalculationRequest) -> Result<HandAnalysis> {
        self.post_json("calculate", request).await
    }

    async fn decide(&self, request: &CalculationRequest) -> Result<Decision> {
        self.post_json("decision", request).await
    }

    async fn service_info(&self) -> Result<ServiceInfo> {
        self.get_json("info").await
    }
}
