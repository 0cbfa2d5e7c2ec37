//! Laptop Shaping: from a raw candidate list to a keyed display list
//!
//! ```text
//! raw records → ShapingRunner [dedup → limit] → assign_keys → ShapedList
//!                     ↓
//!                StageProof per stage
//! ```
//!
//! # Example
//!
//! ```
//! use laptop_core::{CandidateRecord, ShapingConfig};
//! use laptop_shaping::shape;
//!
//! let raw: Vec<CandidateRecord> = serde_json::from_str(
//!     r#"[{"name":"X","gpu":"RTX3050","ram_gb":16,"storage_gb":512,"price":15000000},
//!         {"name":"X","gpu":"RTX3050","ram_gb":16,"storage_gb":512,"price":15000000.4}]"#,
//! ).unwrap();
//!
//! let shaped = shape(raw, &ShapingConfig::default());
//! assert_eq!(shaped.len(), 1);
//! assert_eq!(shaped.items[0].key, "rec|X|RTX3050|16|512|15000000|0");
//! ```

pub mod dedup;
pub mod keys;
pub mod normalizer;
pub mod runner;
pub mod stage;

pub use dedup::{deduplicate, deduplicate_with_outcome, DedupOutcome};
pub use keys::{assign_keys, derive_key, KeyedCandidate};
pub use normalizer::{display_name, CandidateSignature, IdentityFields};
pub use runner::{ShapingRunner, StageProof};
pub use stage::{DedupStage, LimitStage, ShapingStage};

use laptop_core::{CandidateRecord, ShapingConfig};
use serde::{Deserialize, Serialize};

/// A deduplicated, keyed candidate list ready for presentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapedList {
    pub items: Vec<KeyedCandidate>,
    pub pipeline_id: String,
    pub proofs: Vec<StageProof>,
}

impl ShapedList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key records without running any stage (catalog listings)
    pub fn keyed_only(records: Vec<CandidateRecord>) -> Self {
        Self {
            items: assign_keys(records),
            pipeline_id: String::new(),
            proofs: Vec::new(),
        }
    }
}

/// Run the configured stages and key the result
pub fn shape(records: Vec<CandidateRecord>, config: &ShapingConfig) -> ShapedList {
    let runner = ShapingRunner::from_config(config);
    let (records, proofs) = runner.run(records);

    ShapedList {
        items: assign_keys(records),
        pipeline_id: runner.pipeline_id().to_string(),
        proofs,
    }
}
