//! Data Model: SpecificationProfile, CandidateRecord, ComparisonResult
use crate::catalog;
use crate::error::{AdvisorError, AdvisorResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Specification profile
// ============================================================================

/// The configuration a user composes before asking for a prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificationProfile {
    pub brand: String,
    pub cpu: String,
    /// One of 4, 8, 16, 32, 64 (64 = "64 GB or more")
    pub ram_gb: u32,
    /// One of 256, 512, 1024 (1024 = "1 TB")
    pub storage_gb: u32,
    pub gpu: String,
    /// Color gamut coverage in percent. Values above 100 are accepted.
    pub color_gamut: u32,
    /// Maximum budget in Rupiah
    #[serde(default)]
    pub budget: u64,
}

impl Default for SpecificationProfile {
    fn default() -> Self {
        Self {
            brand: "ASUS".to_string(),
            cpu: "Intel i7".to_string(),
            ram_gb: 16,
            storage_gb: 512,
            gpu: "NVIDIA RTX 3050".to_string(),
            color_gamut: 100,
            budget: 15_000_000,
        }
    }
}

impl SpecificationProfile {
    /// Check every enumerated field against its domain.
    pub fn validate(&self) -> AdvisorResult<()> {
        let mut problems = Vec::new();

        if !catalog::is_brand(&self.brand) {
            problems.push(format!("unknown brand '{}'", self.brand));
        }
        if !catalog::is_cpu(&self.cpu) {
            problems.push(format!("unknown cpu '{}'", self.cpu));
        }
        if !catalog::is_ram(self.ram_gb) {
            problems.push(format!(
                "ram_gb {} not one of {:?}",
                self.ram_gb,
                catalog::RAM_OPTIONS
            ));
        }
        if !catalog::is_storage(self.storage_gb) {
            problems.push(format!(
                "storage_gb {} not one of {:?}",
                self.storage_gb,
                catalog::STORAGE_OPTIONS
            ));
        }
        if !catalog::is_gpu(&self.gpu) {
            problems.push(format!("unknown gpu '{}'", self.gpu));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AdvisorError::invalid_input(problems.join("; ")))
        }
    }
}

/// Parse a raw numeric form value. Anything that is not a non-negative
/// integer becomes 0.
pub fn parse_non_negative(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

fn parse_u32(raw: &str) -> u32 {
    u32::try_from(parse_non_negative(raw)).unwrap_or(0)
}

impl FromStr for SpecificationProfile {
    type Err = AdvisorError;

    /// `brand=ASUS,cpu=Intel i7,ram=16,storage=512,gpu=Integrated,gamut=100,budget=9000000`
    ///
    /// Keys left out keep their default value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut profile = SpecificationProfile::default();

        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| AdvisorError::invalid_input(format!("expected key=value, got '{}'", pair)))?;
            let value = value.trim();

            match key.trim() {
                "brand" => profile.brand = value.to_string(),
                "cpu" => profile.cpu = value.to_string(),
                "gpu" => profile.gpu = value.to_string(),
                "ram" | "ram_gb" => profile.ram_gb = parse_u32(value),
                "storage" | "storage_gb" => profile.storage_gb = parse_u32(value),
                "gamut" | "color_gamut" => profile.color_gamut = parse_u32(value),
                "budget" => profile.budget = parse_non_negative(value),
                other => {
                    return Err(AdvisorError::invalid_input(format!(
                        "unknown profile key '{}'",
                        other
                    )))
                }
            }
        }

        Ok(profile)
    }
}

// ============================================================================
// Upstream records
// ============================================================================

/// A numeric field as the service happens to send it
///
/// Numbers, numeric strings and anything else are all accepted so one odd
/// field never fails a whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Other(Value),
}

impl LooseNumber {
    /// Finite numeric value, if there is one
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok()?,
            LooseNumber::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<u32> for LooseNumber {
    fn from(value: u32) -> Self {
        LooseNumber::Number(f64::from(value))
    }
}

/// Service-supplied identifier. Uniqueness is not guaranteed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CandidateId::Number(n) => write!(f, "{}", n),
            CandidateId::Text(s) => f.write_str(s),
            CandidateId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        CandidateId::Text(value.to_string())
    }
}

impl From<u64> for CandidateId {
    fn from(value: u64) -> Self {
        CandidateId::Number(value.into())
    }
}

/// Text field that reads any non-string JSON value as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// A laptop as returned by the recommend and catalog endpoints
///
/// Every field is optional: the service builds these from a cleaned CSV
/// dataset and may null out anything it could not sanitize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CandidateId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cpu: Option<String>,
    #[serde(default)]
    pub ram_gb: Option<LooseNumber>,
    #[serde(default)]
    pub storage_gb: Option<LooseNumber>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gpu: Option<String>,
    #[serde(default)]
    pub color_gamut: Option<LooseNumber>,
    #[serde(default)]
    pub price: Option<LooseNumber>,
    #[serde(default)]
    pub trend_score: Option<LooseNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<LooseNumber>,
    /// Upstream ranking score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<LooseNumber>,
}

impl CandidateRecord {
    pub fn price(&self) -> Option<f64> {
        self.price.as_ref().and_then(LooseNumber::as_f64)
    }

    pub fn trend_score(&self) -> Option<f64> {
        self.trend_score.as_ref().and_then(LooseNumber::as_f64)
    }

    pub fn predicted_price(&self) -> Option<f64> {
        self.predicted_price.as_ref().and_then(LooseNumber::as_f64)
    }

    pub fn ram_gb(&self) -> Option<f64> {
        self.ram_gb.as_ref().and_then(LooseNumber::as_f64)
    }

    pub fn storage_gb(&self) -> Option<f64> {
        self.storage_gb.as_ref().and_then(LooseNumber::as_f64)
    }

    pub fn color_gamut(&self) -> Option<f64> {
        self.color_gamut.as_ref().and_then(LooseNumber::as_f64)
    }
}

// ============================================================================
// Results
// ============================================================================

/// Two predicted prices and their signed difference (A − B)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub a: f64,
    pub b: f64,
    pub diff: f64,
}

impl ComparisonResult {
    pub fn from_predictions(a: f64, b: f64) -> Self {
        Self { a, b, diff: a - b }
    }
}

/// Model statistics published by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceMetrics {
    #[serde(default)]
    pub dataset_count: u64,
    #[serde(default)]
    pub model_r2: Option<f64>,
    #[serde(default)]
    pub model_rmse: Option<f64>,
}

/// Partial catalog entry for create and update calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaptopDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_gb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_gb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_gamut: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl LaptopDraft {
    /// Full entry from a profile, a display name and an observed price
    pub fn from_profile(profile: &SpecificationProfile, name: Option<String>, price: f64) -> Self {
        Self {
            name,
            brand: Some(profile.brand.clone()),
            cpu: Some(profile.cpu.clone()),
            ram_gb: Some(profile.ram_gb),
            storage_gb: Some(profile.storage_gb),
            gpu: Some(profile.gpu.clone()),
            color_gamut: Some(profile.color_gamut),
            price: Some(price),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == LaptopDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(SpecificationProfile::default().validate().is_ok());
    }

    #[test]
    fn test_validation_collects_problems() {
        let profile = SpecificationProfile {
            brand: "Razer".to_string(),
            ram_gb: 12,
            ..SpecificationProfile::default()
        };
        let err = profile.validate().unwrap_err().to_string();
        assert!(err.starts_with("INPUT/"));
        assert!(err.contains("Razer"));
        assert!(err.contains("ram_gb 12"));
    }

    #[test]
    fn test_gamut_above_100_is_allowed() {
        let profile = SpecificationProfile {
            color_gamut: 134,
            ..SpecificationProfile::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_parse_profile() {
        let profile: SpecificationProfile =
            "brand=Lenovo, cpu=AMD Ryzen 7, ram=32, storage=1024, gpu=NVIDIA RTX 3060, budget=abc"
                .parse()
                .unwrap();
        assert_eq!(profile.brand, "Lenovo");
        assert_eq!(profile.cpu, "AMD Ryzen 7");
        assert_eq!(profile.ram_gb, 32);
        assert_eq!(profile.storage_gb, 1024);
        assert_eq!(profile.color_gamut, 100);
        assert_eq!(profile.budget, 0);
    }

    #[test]
    fn test_parse_profile_rejects_unknown_key() {
        let err = "brand=ASUS,battery=99".parse::<SpecificationProfile>().unwrap_err();
        assert!(err.to_string().contains("battery"));
        assert!("brand".parse::<SpecificationProfile>().is_err());
    }

    #[test]
    fn test_non_negative_parsing() {
        assert_eq!(parse_non_negative("15000000"), 15_000_000);
        assert_eq!(parse_non_negative(" 42 "), 42);
        assert_eq!(parse_non_negative("-5"), 0);
        assert_eq!(parse_non_negative(""), 0);
        assert_eq!(parse_non_negative("12abc"), 0);
    }

    #[test]
    fn test_loose_numbers() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "name": null,
            "ram_gb": "16",
            "storage_gb": 512,
            "price": [1, 2],
            "trend_score": 0.75
        }))
        .unwrap();

        assert_eq!(record.name, None);
        assert_eq!(record.ram_gb(), Some(16.0));
        assert_eq!(record.storage_gb(), Some(512.0));
        assert_eq!(record.price(), None);
        assert_eq!(record.trend_score(), Some(0.75));
        assert_eq!(record.predicted_price(), None);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_non_string_text_fields_read_as_absent() {
        let records: Vec<CandidateRecord> = serde_json::from_value(json!([
            { "name": 123, "gpu": 3050, "brand": ["ASUS"], "cpu": { "tier": 7 }, "price": 1 },
            { "name": "Valid", "gpu": "Integrated", "price": 2 }
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, None);
        assert_eq!(records[0].gpu, None);
        assert_eq!(records[0].brand, None);
        assert_eq!(records[0].cpu, None);
        assert_eq!(records[0].price(), Some(1.0));
        assert_eq!(records[1].name.as_deref(), Some("Valid"));
    }

    #[test]
    fn test_candidate_ids() {
        let record: CandidateRecord = serde_json::from_value(json!({ "id": 9123372036854775807u64 })).unwrap();
        assert_eq!(record.id.unwrap().to_string(), "9123372036854775807");

        let record: CandidateRecord = serde_json::from_value(json!({ "id": "config" })).unwrap();
        assert_eq!(record.id, Some(CandidateId::from("config")));
    }

    #[test]
    fn test_comparison_sign() {
        let result = ComparisonResult::from_predictions(18_000_000.0, 20_500_000.0);
        assert_eq!(result.diff, -2_500_000.0);
    }

    #[test]
    fn test_draft_serialization_skips_absent_fields() {
        let draft = LaptopDraft {
            price: Some(14_500_000.0),
            ..LaptopDraft::default()
        };
        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({ "price": 14500000.0 }));
        assert!(LaptopDraft::default().is_empty());
    }
}
