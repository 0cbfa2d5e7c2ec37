//! The prediction service seen from the client
use async_trait::async_trait;
use laptop_core::wire::{CompareRequest, CompareResponse, ConfigurationBody, PredictionResponse, RecommendRequest};
use laptop_core::{AdvisorResult, CandidateRecord, LaptopDraft, ServiceMetrics};

/// Every operation the client can ask of the prediction service.
///
/// Implementations report network problems and non-success statuses as
/// `TransportFailure`, and bodies of the wrong shape as `MalformedResponse`.
/// They never retry.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, configuration: &ConfigurationBody) -> AdvisorResult<PredictionResponse>;

    async fn recommend(&self, request: &RecommendRequest) -> AdvisorResult<Vec<CandidateRecord>>;

    async fn compare(&self, request: &CompareRequest) -> AdvisorResult<CompareResponse>;

    async fn metrics(&self) -> AdvisorResult<ServiceMetrics>;

    async fn list_laptops(&self, limit: usize, offset: usize) -> AdvisorResult<Vec<CandidateRecord>>;

    async fn get_laptop(&self, id: u64) -> AdvisorResult<CandidateRecord>;

    async fn create_laptop(&self, draft: &LaptopDraft) -> AdvisorResult<CandidateRecord>;

    async fn update_laptop(&self, id: u64, draft: &LaptopDraft) -> AdvisorResult<CandidateRecord>;

    async fn delete_laptop(&self, id: u64) -> AdvisorResult<()>;
}
