//! reqwest-backed `PredictionService`
use crate::service::PredictionService;
use async_trait::async_trait;
use laptop_core::wire::{
    CompareRequest, CompareResponse, ConfigurationBody, DeleteResponse, PredictionResponse,
    RecommendRequest,
};
use laptop_core::{AdvisorError, AdvisorResult, CandidateRecord, LaptopDraft, ServiceConfig, ServiceMetrics};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest slice of an error body kept in a `TransportFailure`
const ERROR_BODY_LIMIT: usize = 200;

pub struct HttpPredictionService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPredictionService {
    pub fn new(config: &ServiceConfig) -> AdvisorResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> AdvisorResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(operation, e))?;

        if !status.is_success() {
            let text: String = String::from_utf8_lossy(&body)
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            warn!(operation, status = status.as_u16(), "prediction service returned an error status");
            return Err(AdvisorError::transport(Some(status.as_u16()), text.trim()));
        }

        debug!(operation, bytes = body.len(), "prediction service responded");
        serde_json::from_slice(&body)
            .map_err(|e| AdvisorError::malformed(format!("{operation}: {e}")))
    }
}

fn transport_error(operation: &'static str, err: reqwest::Error) -> AdvisorError {
    warn!(operation, error = %err, "prediction service unreachable");
    let message = if err.is_timeout() {
        format!("{operation}: request timed out")
    } else {
        format!("{operation}: {err}")
    };
    AdvisorError::transport(err.status().map(|s| s.as_u16()), message)
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, configuration: &ConfigurationBody) -> AdvisorResult<PredictionResponse> {
        let request = self.client.post(self.url("/api/predict")).json(configuration);
        self.send("predict", request).await
    }

    async fn recommend(&self, request: &RecommendRequest) -> AdvisorResult<Vec<CandidateRecord>> {
        let request = self.client.post(self.url("/api/recommend")).json(request);
        self.send("recommend", request).await
    }

    async fn compare(&self, request: &CompareRequest) -> AdvisorResult<CompareResponse> {
        let request = self.client.post(self.url("/api/compare")).json(request);
        self.send("compare", request).await
    }

    async fn metrics(&self) -> AdvisorResult<ServiceMetrics> {
        let request = self.client.get(self.url("/api/metrics"));
        self.send("metrics", request).await
    }

    async fn list_laptops(&self, limit: usize, offset: usize) -> AdvisorResult<Vec<CandidateRecord>> {
        let request = self
            .client
            .get(self.url("/api/laptops"))
            .query(&[("limit", limit), ("offset", offset)]);
        self.send("list_laptops", request).await
    }

    async fn get_laptop(&self, id: u64) -> AdvisorResult<CandidateRecord> {
        let request = self.client.get(self.url(&format!("/api/laptops/{id}")));
        self.send("get_laptop", request).await
    }

    async fn create_laptop(&self, draft: &LaptopDraft) -> AdvisorResult<CandidateRecord> {
        let request = self.client.post(self.url("/api/laptops")).json(draft);
        self.send("create_laptop", request).await
    }

    async fn update_laptop(&self, id: u64, draft: &LaptopDraft) -> AdvisorResult<CandidateRecord> {
        let request = self
            .client
            .patch(self.url(&format!("/api/laptops/{id}")))
            .json(draft);
        self.send("update_laptop", request).await
    }

    async fn delete_laptop(&self, id: u64) -> AdvisorResult<()> {
        let request = self.client.delete(self.url(&format!("/api/laptops/{id}")));
        let response: DeleteResponse = self.send("delete_laptop", request).await?;
        if response.ok {
            Ok(())
        } else {
            Err(AdvisorError::malformed("delete_laptop: service answered ok=false"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_config() {
        let config = ServiceConfig {
            base_url: "localhost:5000".to_string(),
            timeout_secs: 5,
        };
        assert!(HttpPredictionService::new(&config).is_err());
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ServiceConfig {
            base_url: "http://127.0.0.1:5000/".to_string(),
            timeout_secs: 5,
        };
        let service = HttpPredictionService::new(&config).unwrap();
        assert_eq!(service.url("/api/predict"), "http://127.0.0.1:5000/api/predict");
    }
}
