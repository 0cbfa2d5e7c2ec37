//! View models handed to templates or serialized as-is.
use crate::format::{displayable_prediction, format_statistic, trend_percent};
use laptop_core::catalog::{ram_label, storage_label};
use laptop_core::{ComparisonResult, ServiceMetrics};
use laptop_shaping::{display_name, KeyedCandidate, ShapedList};
use serde::Serialize;

/// One row of a result list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateView {
    pub key: String,
    pub name: String,
    pub brand: Option<String>,
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub gpu: Option<String>,
    pub color_gamut: Option<f64>,
    pub price: Option<f64>,
    /// Clamped to 0..=100
    pub trend_percent: u8,
    /// `None` reads as "not available"
    pub predicted_price: Option<f64>,
}

impl From<&KeyedCandidate> for CandidateView {
    fn from(candidate: &KeyedCandidate) -> Self {
        let record = &candidate.record;
        Self {
            key: candidate.key.clone(),
            name: display_name(record),
            brand: trimmed(record.brand.as_deref()),
            cpu: trimmed(record.cpu.as_deref()),
            ram: record.ram_gb().map(|gb| ram_label(gb as u32)),
            storage: record.storage_gb().map(|gb| storage_label(gb as u32)),
            gpu: trimmed(record.gpu.as_deref()),
            color_gamut: record.color_gamut(),
            price: record.price(),
            trend_percent: trend_percent(record.trend_score()),
            predicted_price: displayable_prediction(record.predicted_price()),
        }
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The result panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub count: usize,
    pub items: Vec<CandidateView>,
}

impl From<&ShapedList> for ListView {
    fn from(list: &ShapedList) -> Self {
        Self {
            count: list.len(),
            items: list.items.iter().map(CandidateView::from).collect(),
        }
    }
}

/// Which configuration is cheaper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cheaper {
    A,
    B,
    Neither,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub a: f64,
    pub b: f64,
    /// a − b
    pub diff: f64,
    pub cheaper: Cheaper,
}

impl From<&ComparisonResult> for ComparisonView {
    fn from(result: &ComparisonResult) -> Self {
        let cheaper = if result.diff < 0.0 {
            Cheaper::A
        } else if result.diff > 0.0 {
            Cheaper::B
        } else {
            Cheaper::Neither
        };
        Self {
            a: result.a,
            b: result.b,
            diff: result.diff,
            cheaper,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsView {
    pub dataset_count: u64,
    pub r2: String,
    pub rmse: String,
}

impl From<&ServiceMetrics> for MetricsView {
    fn from(metrics: &ServiceMetrics) -> Self {
        Self {
            dataset_count: metrics.dataset_count,
            r2: format_statistic(metrics.model_r2, 3),
            rmse: format_statistic(metrics.model_rmse, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NOT_AVAILABLE;
    use laptop_core::CandidateRecord;
    use serde_json::json;

    fn keyed(value: serde_json::Value) -> KeyedCandidate {
        KeyedCandidate {
            key: "rec|1".to_string(),
            record: serde_json::from_value::<CandidateRecord>(value).unwrap(),
        }
    }

    #[test]
    fn test_candidate_view_clamps_trend() {
        let view = CandidateView::from(&keyed(json!({
            "name": " Zenbook ", "ram_gb": 64, "storage_gb": "1024",
            "price": 15000000, "trend_score": 1.4
        })));
        assert_eq!(view.name, "Zenbook");
        assert_eq!(view.trend_percent, 100);
        assert_eq!(view.ram.as_deref(), Some("64 GB+"));
        assert_eq!(view.storage.as_deref(), Some("1 TB"));
        assert_eq!(view.predicted_price, None);
    }

    #[test]
    fn test_candidate_view_tolerates_garbage() {
        let view = CandidateView::from(&keyed(json!({
            "brand": "Acer", "cpu": "Intel i5", "price": "n/a",
            "trend_score": "high", "predicted_price": null, "gpu": "  "
        })));
        assert_eq!(view.name, "Acer Intel i5");
        assert_eq!(view.price, None);
        assert_eq!(view.trend_percent, 0);
        assert_eq!(view.gpu, None);
    }

    #[test]
    fn test_comparison_view() {
        let view = ComparisonView::from(&ComparisonResult::from_predictions(15e6, 17.5e6));
        assert_eq!(view.diff, -2_500_000.0);
        assert_eq!(view.cheaper, Cheaper::A);
    }

    #[test]
    fn test_metrics_view_null_statistics() {
        let view = MetricsView::from(&ServiceMetrics {
            dataset_count: 120,
            model_r2: Some(0.8766),
            model_rmse: None,
        });
        assert_eq!(view.r2, "0.877");
        assert_eq!(view.rmse, NOT_AVAILABLE);
    }
}
