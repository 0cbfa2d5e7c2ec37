//! Head-to-head price comparison of two configurations.
//!
//! All-or-nothing: a comparison where one side failed is an error, never a
//! one-sided result. No retries.

use laptop_client::PredictionService;
use laptop_core::wire::{CompareRequest, ConfigurationBody};
use laptop_core::{
    AdvisorError, AdvisorResult, ComparisonMode, ComparisonResult, ComparisonSide,
    SpecificationProfile,
};
use tracing::{debug, warn};

/// Largest upstream/local diff gap (in Rupiah) not worth a warning
pub const DIFF_TOLERANCE: f64 = 0.5;

pub struct Comparator<'a, S: ?Sized> {
    service: &'a S,
    mode: ComparisonMode,
}

impl<'a, S: PredictionService + ?Sized> Comparator<'a, S> {
    pub fn new(service: &'a S, mode: ComparisonMode) -> Self {
        Self { service, mode }
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Predict both configurations and return `a − b`.
    pub async fn compare(
        &self,
        a: &SpecificationProfile,
        b: &SpecificationProfile,
    ) -> AdvisorResult<ComparisonResult> {
        validate_side(ComparisonSide::A, a)?;
        validate_side(ComparisonSide::B, b)?;

        match self.mode {
            ComparisonMode::Local => self.compare_local(a.into(), b.into()).await,
            ComparisonMode::Upstream => self.compare_upstream(a.into(), b.into()).await,
        }
    }

    async fn compare_local(
        &self,
        a: ConfigurationBody,
        b: ConfigurationBody,
    ) -> AdvisorResult<ComparisonResult> {
        // both requests in flight at once, on this task
        let (side_a, side_b) = tokio::join!(self.service.predict(&a), self.service.predict(&b));

        match (side_a, side_b) {
            (Ok(pa), Ok(pb)) => {
                let result = ComparisonResult::from_predictions(pa.predicted_price, pb.predicted_price);
                debug!(a = result.a, b = result.b, diff = result.diff, "comparison complete");
                Ok(result)
            }
            (Err(err), Ok(_)) => Err(AdvisorError::prediction_unavailable(ComparisonSide::A, err)),
            (Ok(_), Err(err)) => Err(AdvisorError::prediction_unavailable(ComparisonSide::B, err)),
            (Err(err_a), Err(err_b)) => {
                warn!(a = %err_a, b = %err_b, "both predictions failed");
                Err(AdvisorError::both_predictions_unavailable(err_a, err_b))
            }
        }
    }

    async fn compare_upstream(
        &self,
        a: ConfigurationBody,
        b: ConfigurationBody,
    ) -> AdvisorResult<ComparisonResult> {
        let response = self
            .service
            .compare(&CompareRequest { a, b })
            .await
            .map_err(|err| AdvisorError::prediction_unavailable(ComparisonSide::Both, err))?;

        let result = ComparisonResult::from_predictions(
            response.a.predicted_price,
            response.b.predicted_price,
        );
        if (response.diff - result.diff).abs() > DIFF_TOLERANCE {
            warn!(
                upstream = response.diff,
                local = result.diff,
                "upstream diff is not a - b, using the local value"
            );
        }
        Ok(result)
    }
}

fn validate_side(side: ComparisonSide, profile: &SpecificationProfile) -> AdvisorResult<()> {
    profile.validate().map_err(|err| match err {
        AdvisorError::InvalidInput(message) => {
            AdvisorError::invalid_input(format!("profile {side}: {message}"))
        }
        other => other,
    })
}
