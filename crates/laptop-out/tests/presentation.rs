//! Rendering through the shipped templates/views.yaml

use laptop_core::{CandidateRecord, ComparisonResult, PresentationConfig, ServiceMetrics, ShapingConfig};
use laptop_out::{Presenter, NOT_AVAILABLE};
use laptop_shaping::shape;
use serde_json::json;

fn templates_path() -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap();
    workspace_root
        .join("templates/views.yaml")
        .to_string_lossy()
        .to_string()
}

fn presenter() -> Presenter {
    Presenter::from_config(&PresentationConfig {
        templates_path: Some(templates_path()),
    })
    .unwrap()
}

fn records(value: serde_json::Value) -> Vec<CandidateRecord> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_candidate_list() {
    let shaped = shape(
        records(json!([
            {"id": 1, "name": "ASUS Vivobook", "gpu": "NVIDIA RTX 3050", "ram_gb": 16,
             "storage_gb": 512, "price": 15000000, "trend_score": 1.4},
            {"id": 2, "brand": "Lenovo", "cpu": "AMD Ryzen 7", "ram_gb": 64,
             "storage_gb": 1024, "price": "12499999.5", "trend_score": null,
             "predicted_price": 13100000}
        ])),
        &ShapingConfig::default(),
    );

    let text = presenter().candidates(&shaped).unwrap();

    assert!(text.contains("2 laptop(s)"));
    assert!(text.contains("1. ASUS Vivobook | NVIDIA RTX 3050 | 16 GB | 512 GB"));
    assert!(text.contains("Price: Rp 15.000.000   Trend: 100%   Predicted: —"));
    assert!(text.contains("2. Lenovo AMD Ryzen 7 | 64 GB+ | 1 TB"));
    assert!(text.contains("Price: Rp 12.500.000   Trend: 0%   Predicted: Rp 13.100.000"));
}

#[test]
fn test_empty_list() {
    let shaped = shape(Vec::new(), &ShapingConfig::default());
    let text = presenter().candidates(&shaped).unwrap();
    assert!(text.contains("No laptops match this configuration."));
}

#[test]
fn test_comparison() {
    let text = presenter()
        .comparison(&ComparisonResult::from_predictions(15_000_000.0, 17_500_000.0))
        .unwrap();

    assert!(text.contains("Configuration A: Rp 15.000.000"));
    assert!(text.contains("Configuration B: Rp 17.500.000"));
    assert!(text.contains("Difference (A - B): Rp -2.500.000"));
    assert!(text.contains("A is cheaper."));
}

#[test]
fn test_metrics_with_missing_statistics() {
    let text = presenter()
        .metrics(&ServiceMetrics {
            dataset_count: 1200,
            model_r2: Some(0.912),
            model_rmse: None,
        })
        .unwrap();

    assert!(text.contains("Dataset size: 1200"));
    assert!(text.contains("R²: 0.912"));
    assert!(text.contains(&format!("RMSE: {}", NOT_AVAILABLE)));
}

#[test]
fn test_missing_templates_file() {
    let result = Presenter::from_config(&PresentationConfig {
        templates_path: Some("/nonexistent/views.yaml".to_string()),
    });
    assert!(result.is_err());
}
