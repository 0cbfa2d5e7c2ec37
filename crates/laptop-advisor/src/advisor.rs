//! Advisor flows: validate locally, call the service once (or twice), shape.
use crate::comparator::Comparator;
use laptop_client::PredictionService;
use laptop_core::wire::RecommendRequest;
use laptop_core::{
    AdvisorConfig, AdvisorResult, CandidateId, CandidateRecord, ComparisonMode, ComparisonResult,
    LaptopDraft, LooseNumber, RequestContext, ServiceMetrics, ShapingConfig,
    SpecificationProfile, WeightProfile,
};
use laptop_shaping::{shape, ShapedList};
use tracing::{info, Instrument};

/// Identifier of the synthetic candidate produced by `predict`
pub const CONFIG_CANDIDATE_ID: &str = "config";
pub const CONFIG_CANDIDATE_NAME: &str = "Your configuration";
/// Neutral trend shown for the synthetic candidate
pub const CONFIG_CANDIDATE_TREND: f64 = 0.5;

pub const DEFAULT_PAGE_LIMIT: usize = 50;

pub struct Advisor<S> {
    service: S,
    weights: WeightProfile,
    shaping: ShapingConfig,
    comparison: ComparisonMode,
}

impl<S: PredictionService> Advisor<S> {
    pub fn new(service: S, config: &AdvisorConfig) -> Self {
        Self {
            service,
            weights: config.weights.clone(),
            shaping: config.shaping.clone(),
            comparison: config.comparison.mode,
        }
    }

    /// Same advisor with another weight profile
    pub fn with_weights(mut self, weights: WeightProfile) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_comparison_mode(mut self, mode: ComparisonMode) -> Self {
        self.comparison = mode;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn weights(&self) -> &WeightProfile {
        &self.weights
    }

    /// Ranked, deduplicated and keyed candidates for a profile
    pub async fn recommend(&self, profile: &SpecificationProfile) -> AdvisorResult<ShapedList> {
        let ctx = RequestContext::new("recommend");
        async {
            profile.validate()?;
            self.weights.validate()?;

            let request = RecommendRequest::new(profile, self.weights.clone());
            let raw = self.service.recommend(&request).await?;
            let received = raw.len();

            let shaped = shape(raw, &self.shaping);
            info!(received, shown = shaped.len(), elapsed_ms = ctx.elapsed_ms(), "recommendations shaped");
            Ok(shaped)
        }
        .instrument(ctx.span())
        .await
    }

    pub async fn predict_price(&self, profile: &SpecificationProfile) -> AdvisorResult<f64> {
        let ctx = RequestContext::new("predict");
        async {
            profile.validate()?;
            let response = self.service.predict(&profile.into()).await?;
            info!(predicted_price = response.predicted_price, elapsed_ms = ctx.elapsed_ms(), "price predicted");
            Ok(response.predicted_price)
        }
        .instrument(ctx.span())
        .await
    }

    /// The user's own configuration as a single displayable candidate
    pub async fn predict(&self, profile: &SpecificationProfile) -> AdvisorResult<ShapedList> {
        let predicted = self.predict_price(profile).await?;
        Ok(shape(vec![configuration_candidate(profile, predicted)], &self.shaping))
    }

    pub async fn compare(
        &self,
        a: &SpecificationProfile,
        b: &SpecificationProfile,
    ) -> AdvisorResult<ComparisonResult> {
        let ctx = RequestContext::new("compare");
        async {
            let result = Comparator::new(&self.service, self.comparison)
                .compare(a, b)
                .await?;
            info!(diff = result.diff, mode = ?self.comparison, elapsed_ms = ctx.elapsed_ms(), "configurations compared");
            Ok(result)
        }
        .instrument(ctx.span())
        .await
    }

    pub async fn metrics(&self) -> AdvisorResult<ServiceMetrics> {
        let ctx = RequestContext::new("metrics");
        self.service.metrics().instrument(ctx.span()).await
    }

    /// A page of the service's dataset, keyed for display
    pub async fn list_laptops(&self, limit: usize, offset: usize) -> AdvisorResult<ShapedList> {
        let ctx = RequestContext::new("list_laptops");
        let rows = self
            .service
            .list_laptops(limit, offset)
            .instrument(ctx.span())
            .await?;
        Ok(ShapedList::keyed_only(rows))
    }

    pub async fn get_laptop(&self, id: u64) -> AdvisorResult<CandidateRecord> {
        let ctx = RequestContext::new("get_laptop");
        self.service.get_laptop(id).instrument(ctx.span()).await
    }

    pub async fn create_laptop(&self, draft: &LaptopDraft) -> AdvisorResult<CandidateRecord> {
        let ctx = RequestContext::new("create_laptop");
        let created = self.service.create_laptop(draft).instrument(ctx.span()).await?;
        info!(id = ?created.id, "laptop created");
        Ok(created)
    }

    pub async fn update_laptop(&self, id: u64, draft: &LaptopDraft) -> AdvisorResult<CandidateRecord> {
        if draft.is_empty() {
            return Err(laptop_core::AdvisorError::invalid_input("nothing to update"));
        }
        let ctx = RequestContext::new("update_laptop");
        self.service.update_laptop(id, draft).instrument(ctx.span()).await
    }

    pub async fn delete_laptop(&self, id: u64) -> AdvisorResult<()> {
        let ctx = RequestContext::new("delete_laptop");
        self.service.delete_laptop(id).instrument(ctx.span()).await?;
        info!(id, "laptop deleted");
        Ok(())
    }
}

/// Candidate standing for the user's own configuration: priced at the
/// budget, with the prediction alongside.
pub fn configuration_candidate(profile: &SpecificationProfile, predicted_price: f64) -> CandidateRecord {
    CandidateRecord {
        id: Some(CandidateId::from(CONFIG_CANDIDATE_ID)),
        name: Some(CONFIG_CANDIDATE_NAME.to_string()),
        brand: Some(profile.brand.clone()),
        cpu: Some(profile.cpu.clone()),
        ram_gb: Some(profile.ram_gb.into()),
        storage_gb: Some(profile.storage_gb.into()),
        gpu: Some(profile.gpu.clone()),
        color_gamut: Some(profile.color_gamut.into()),
        price: Some(LooseNumber::Number(profile.budget as f64)),
        trend_score: Some(LooseNumber::Number(CONFIG_CANDIDATE_TREND)),
        predicted_price: Some(LooseNumber::Number(predicted_price)),
        score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_candidate() {
        let candidate = configuration_candidate(&SpecificationProfile::default(), 14_250_000.0);
        assert_eq!(candidate.id.as_ref().unwrap().to_string(), "config");
        assert_eq!(candidate.price(), Some(15_000_000.0));
        assert_eq!(candidate.trend_score(), Some(0.5));
        assert_eq!(candidate.predicted_price(), Some(14_250_000.0));
        assert_eq!(candidate.ram_gb(), Some(16.0));
    }
}
