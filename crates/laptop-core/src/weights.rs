//! Weight profile attached to every recommendation request
//!
//! The criterion names are part of the service contract, so the profile is
//! kept as an open map and checked against the fixed set in `validate()`
//! rather than baked into a struct. A profile read from configuration with a
//! typo in a key is then caught before it reaches the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A scoring criterion understood by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    Brand,
    Cpu,
    Ram,
    Storage,
    Gpu,
    ColorGamut,
    Price,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::Brand,
        Criterion::Cpu,
        Criterion::Ram,
        Criterion::Storage,
        Criterion::Gpu,
        Criterion::ColorGamut,
        Criterion::Price,
    ];

    /// Wire name of the criterion
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Brand => "brand",
            Criterion::Cpu => "cpu",
            Criterion::Ram => "ram",
            Criterion::Storage => "storage",
            Criterion::Gpu => "gpu",
            Criterion::ColorGamut => "color_gamut",
            Criterion::Price => "price",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    /// Weight in the reference profile
    pub fn reference_weight(&self) -> f64 {
        match self {
            Criterion::Brand => 0.04,
            Criterion::Cpu => 0.30,
            Criterion::Ram => 0.22,
            Criterion::Storage => 0.10,
            Criterion::Gpu => 0.20,
            Criterion::ColorGamut => 0.08,
            Criterion::Price => 0.06,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a weight profile is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("missing criteria: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("unknown criteria: {}", .0.join(", "))]
    Unknown(Vec<String>),

    #[error("weight for {criterion} is negative ({value})")]
    Negative { criterion: String, value: f64 },

    #[error("weight for {0} is not a finite number")]
    NonFinite(String),

    #[error("weights sum to zero")]
    ZeroTotal,
}

/// Mapping from criterion name to a non-negative weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightProfile {
    weights: BTreeMap<String, f64>,
}

impl WeightProfile {
    /// The reference profile: brand 4%, CPU 30%, RAM 22%, storage 10%,
    /// GPU 20%, gamut 8%, price 6%.
    pub fn reference() -> Self {
        Self {
            weights: Criterion::ALL
                .iter()
                .map(|c| (c.as_str().to_string(), c.reference_weight()))
                .collect(),
        }
    }

    /// Build from arbitrary name/weight pairs. Nothing is checked until
    /// `validate()`.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            weights: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        self.weights.get(criterion.as_str()).copied()
    }

    /// Copy of this profile with one criterion reweighted
    pub fn with(mut self, criterion: Criterion, weight: f64) -> Self {
        self.weights.insert(criterion.as_str().to_string(), weight);
        self
    }

    /// Copy of this profile without the named entry
    pub fn without(mut self, name: &str) -> Self {
        self.weights.remove(name);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Check the criterion set and values before the profile is sent.
    pub fn validate(&self) -> Result<(), WeightError> {
        let missing: Vec<String> = Criterion::ALL
            .iter()
            .filter(|c| !self.weights.contains_key(c.as_str()))
            .map(|c| c.as_str().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(WeightError::Missing(missing));
        }

        let unknown: Vec<String> = self
            .weights
            .keys()
            .filter(|k| Criterion::from_name(k).is_none())
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(WeightError::Unknown(unknown));
        }

        for (name, value) in &self.weights {
            if !value.is_finite() {
                return Err(WeightError::NonFinite(name.clone()));
            }
            if *value < 0.0 {
                return Err(WeightError::Negative {
                    criterion: name.clone(),
                    value: *value,
                });
            }
        }

        if self.total() <= 0.0 {
            return Err(WeightError::ZeroTotal);
        }

        Ok(())
    }

    /// Rescale so the weights sum to 1. Fails for profiles `validate()`
    /// would reject.
    pub fn normalized(&self) -> Result<Self, WeightError> {
        self.validate()?;
        let total = self.total();
        Ok(Self {
            weights: self
                .weights
                .iter()
                .map(|(k, v)| (k.clone(), v / total))
                .collect(),
        })
    }
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self::reference()
    }
}
