//! Request and response bodies of the prediction service
//!
//! Field names here are the contract; renaming one breaks the service.
use crate::data_model::SpecificationProfile;
use crate::weights::WeightProfile;
use serde::{Deserialize, Serialize};

/// The six fields the model predicts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationBody {
    pub brand: String,
    pub cpu: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub gpu: String,
    pub color_gamut: u32,
}

impl From<&SpecificationProfile> for ConfigurationBody {
    fn from(profile: &SpecificationProfile) -> Self {
        Self {
            brand: profile.brand.clone(),
            cpu: profile.cpu.clone(),
            ram_gb: profile.ram_gb,
            storage_gb: profile.storage_gb,
            gpu: profile.gpu.clone(),
            color_gamut: profile.color_gamut,
        }
    }
}

/// `POST /api/recommend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(flatten)]
    pub configuration: ConfigurationBody,
    pub budget: u64,
    pub weights: WeightProfile,
}

impl RecommendRequest {
    pub fn new(profile: &SpecificationProfile, weights: WeightProfile) -> Self {
        Self {
            configuration: profile.into(),
            budget: profile.budget,
            weights,
        }
    }
}

/// `POST /api/compare`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub a: ConfigurationBody,
    pub b: ConfigurationBody,
}

/// `POST /api/predict` response, also each side of a compare response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
}

/// `POST /api/compare` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub a: PredictionResponse,
    pub b: PredictionResponse,
    pub diff: f64,
}

/// `DELETE /api/laptops/{id}` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recommend_body_shape() {
        let request = RecommendRequest::new(&SpecificationProfile::default(), WeightProfile::reference());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["brand"], json!("ASUS"));
        assert_eq!(body["ram_gb"], json!(16));
        assert_eq!(body["budget"], json!(15_000_000));
        assert_eq!(body["weights"]["cpu"], json!(0.30));
        assert!(body.get("configuration").is_none());
    }

    #[test]
    fn test_prediction_body_has_no_budget() {
        let body = serde_json::to_value(ConfigurationBody::from(&SpecificationProfile::default())).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 6);
        assert!(body.get("budget").is_none());
    }

    #[test]
    fn test_null_prediction_is_rejected() {
        let parsed = serde_json::from_value::<PredictionResponse>(json!({ "predicted_price": null }));
        assert!(parsed.is_err());
    }
}
