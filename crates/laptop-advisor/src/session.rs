//! Panel state for an interactive advisor session.
//!
//! Two panels: the result list (recommend or predict) and the comparison.
//! A remote failure clears the panel it belongs to so nothing stale is
//! shown; a local validation failure leaves both untouched.

use crate::advisor::Advisor;
use laptop_client::PredictionService;
use laptop_core::{AdvisorError, AdvisorResult, ComparisonResult, SpecificationProfile};
use laptop_shaping::ShapedList;
use tracing::error;

pub struct AdvisorSession<S> {
    advisor: Advisor<S>,
    results: Option<ShapedList>,
    comparison: Option<ComparisonResult>,
}

impl<S: PredictionService> AdvisorSession<S> {
    pub fn new(advisor: Advisor<S>) -> Self {
        Self {
            advisor,
            results: None,
            comparison: None,
        }
    }

    pub fn advisor(&self) -> &Advisor<S> {
        &self.advisor
    }

    pub fn results(&self) -> Option<&ShapedList> {
        self.results.as_ref()
    }

    pub fn comparison(&self) -> Option<&ComparisonResult> {
        self.comparison.as_ref()
    }

    pub async fn recommend(&mut self, profile: &SpecificationProfile) -> AdvisorResult<&ShapedList> {
        match self.advisor.recommend(profile).await {
            Ok(list) => Ok(self.results.insert(list)),
            Err(err) => Err(settle(err, &mut self.results)),
        }
    }

    pub async fn predict(&mut self, profile: &SpecificationProfile) -> AdvisorResult<&ShapedList> {
        match self.advisor.predict(profile).await {
            Ok(list) => Ok(self.results.insert(list)),
            Err(err) => Err(settle(err, &mut self.results)),
        }
    }

    pub async fn compare(
        &mut self,
        a: &SpecificationProfile,
        b: &SpecificationProfile,
    ) -> AdvisorResult<&ComparisonResult> {
        match self.advisor.compare(a, b).await {
            Ok(result) => Ok(self.comparison.insert(result)),
            Err(err) => Err(settle(err, &mut self.comparison)),
        }
    }
}

fn settle<T>(err: AdvisorError, panel: &mut Option<T>) -> AdvisorError {
    if !err.is_local() {
        error!(error = %err, "request failed, clearing panel");
        *panel = None;
    }
    err
}
