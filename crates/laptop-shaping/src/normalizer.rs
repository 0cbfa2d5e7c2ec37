//! Candidate normalization.
//!
//! Reduces an upstream record to the five fields that decide whether two
//! records describe the same laptop:
//! - display name (name, or "brand cpu" when the name is blank)
//! - trimmed GPU
//! - RAM and storage as written
//! - price rounded to the nearest Rupiah
//!
//! Absent or unparseable fields resolve to an empty string (price to 0), so
//! normalization never fails.

use laptop_core::{CandidateRecord, LooseNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between signature fields
pub const SIGNATURE_DELIMITER: &str = "|";

/// Name shown for a candidate: the trimmed name when it is non-empty,
/// otherwise trimmed brand and cpu joined by a space.
pub fn display_name(record: &CandidateRecord) -> String {
    if let Some(name) = record.name.as_deref().map(str::trim) {
        if !name.is_empty() {
            return name.to_string();
        }
    }

    let brand = record.brand.as_deref().map(str::trim).unwrap_or("");
    let cpu = record.cpu.as_deref().map(str::trim).unwrap_or("");
    format!("{} {}", brand, cpu).trim().to_string()
}

pub fn gpu_token(record: &CandidateRecord) -> String {
    record
        .gpu
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

/// String form of a count field ("16"), or "" when absent or unparseable
pub fn count_token(value: Option<&LooseNumber>) -> String {
    value
        .and_then(LooseNumber::as_f64)
        .map(|v| format!("{}", v))
        .unwrap_or_default()
}

/// Price rounded to the nearest integer; missing or non-numeric is 0
pub fn rounded_price(record: &CandidateRecord) -> i64 {
    record.price().map(f64::round).unwrap_or(0.0) as i64
}

/// The resolved identity fields of one record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityFields {
    pub name: String,
    pub gpu: String,
    pub ram_gb: String,
    pub storage_gb: String,
    pub price: String,
}

impl IdentityFields {
    pub fn resolve(record: &CandidateRecord) -> Self {
        Self {
            name: display_name(record),
            gpu: gpu_token(record),
            ram_gb: count_token(record.ram_gb.as_ref()),
            storage_gb: count_token(record.storage_gb.as_ref()),
            price: rounded_price(record).to_string(),
        }
    }

    pub fn parts(&self) -> [&str; 5] {
        [
            &self.name,
            &self.gpu,
            &self.ram_gb,
            &self.storage_gb,
            &self.price,
        ]
    }
}

/// Canonical identity of a candidate, used for deduplication
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSignature(String);

impl CandidateSignature {
    pub fn of(record: &CandidateRecord) -> Self {
        Self(IdentityFields::resolve(record).parts().join(SIGNATURE_DELIMITER))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateSignature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
