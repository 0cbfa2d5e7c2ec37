//! Advisor configuration, read from an optional YAML file
use crate::error::{AdvisorError, AdvisorResult};
use crate::weights::WeightProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Overrides `service.base_url` when set
pub const BASE_URL_ENV: &str = "LAPTOP_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdvisorConfig {
    pub service: ServiceConfig,
    pub weights: WeightProfile,
    pub shaping: ShapingConfig,
    pub comparison: ComparisonConfig,
    pub presentation: PresentationConfig,
}

impl AdvisorConfig {
    /// Load from `path` (defaults when `None`), then apply the environment.
    pub fn load(path: Option<&Path>) -> AdvisorResult<Self> {
        let mut config = if let Some(path) = path {
            let data = std::fs::read_to_string(path).map_err(|e| {
                AdvisorError::Config(format!("failed to read config {}: {e}", path.display()))
            })?;
            Self::from_yaml(&data).map_err(|e| {
                AdvisorError::Config(format!("failed to parse config {}: {e}", path.display()))
            })?
        } else {
            Self::default()
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                tracing::debug!(%base_url, "base url taken from {}", BASE_URL_ENV);
                config.service.base_url = base_url.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> AdvisorResult<()> {
        self.service.validate()?;
        self.weights.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Root of the prediction service; `/api/...` paths are appended
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> AdvisorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AdvisorError::Config(format!(
                "service.base_url must be http(s), got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AdvisorError::Config(
                "service.timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShapingConfig {
    /// Keep at most this many candidates after deduplication
    pub max_results: Option<usize>,
}

/// Where the comparison diff is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Two predict calls, diff computed here
    #[default]
    Local,
    /// One compare call; the diff is still recomputed here
    Upstream,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComparisonConfig {
    pub mode: ComparisonMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PresentationConfig {
    /// Handlebars templates file; the built-in set is used when absent
    pub templates_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::{Criterion, WeightError};

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::default();
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.comparison.mode, ComparisonMode::Local);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let config = AdvisorConfig::from_yaml(
            r#"
service:
  base_url: http://72.60.78.25/
comparison:
  mode: upstream
shaping:
  max_results: 10
"#,
        )
        .unwrap();

        assert_eq!(config.service.base(), "http://72.60.78.25");
        assert_eq!(config.service.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.comparison.mode, ComparisonMode::Upstream);
        assert_eq!(config.shaping.max_results, Some(10));
        assert_eq!(config.weights, WeightProfile::reference());
    }

    #[test]
    fn test_custom_weights_are_validated() {
        let config = AdvisorConfig::from_yaml(
            r#"
weights:
  brand: 0.1
  cpu: 0.3
  ram: 0.2
  storage: 0.1
  color_gamut: 0.1
  price: 0.2
"#,
        )
        .unwrap();

        assert_eq!(config.weights.get(Criterion::Gpu), None);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::InvalidWeights(WeightError::Missing(_))
        ));
    }

    #[test]
    fn test_bad_service_settings() {
        let mut config = AdvisorConfig::default();
        config.service.base_url = "ftp://example".to_string();
        assert!(config.validate().is_err());

        let mut config = AdvisorConfig::default();
        config.service.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(AdvisorError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = AdvisorConfig::load(Some(Path::new("/nonexistent/advisor.yaml"))).unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }
}
