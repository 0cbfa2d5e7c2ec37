//! Shaping Runner: chains stages and records a proof for each
use crate::stage::{DedupStage, LimitStage, ShapingStage};
use laptop_core::{CandidateRecord, ShapingConfig};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// What one stage did to the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageProof {
    pub id: String,
    pub in_hash: String,
    pub out_hash: String,
    pub in_count: usize,
    pub out_count: usize,
    pub deterministic: bool,
    pub latency_us: u64,
}

pub struct ShapingRunner {
    stages: Vec<Box<dyn ShapingStage>>,
    pipeline_id: String,
}

impl ShapingRunner {
    pub fn new(stages: Vec<Box<dyn ShapingStage>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id().split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Dedup, then the optional result limit
    pub fn from_config(config: &ShapingConfig) -> Self {
        let mut stages: Vec<Box<dyn ShapingStage>> = vec![Box::new(DedupStage)];
        if let Some(max) = config.max_results {
            stages.push(Box::new(LimitStage { max }));
        }
        Self::new(stages)
    }

    pub fn run(&self, input: Vec<CandidateRecord>) -> (Vec<CandidateRecord>, Vec<StageProof>) {
        let mut current = input;
        let mut proofs = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let start = Instant::now();
            let in_hash = hash_records(&current);
            let in_count = current.len();

            current = stage.apply(current);

            let proof = StageProof {
                id: stage.id().to_string(),
                in_hash,
                out_hash: hash_records(&current),
                in_count,
                out_count: current.len(),
                deterministic: stage.deterministic(),
                latency_us: start.elapsed().as_micros() as u64,
            };
            tracing::debug!(
                stage = %proof.id,
                in_count = proof.in_count,
                out_count = proof.out_count,
                out_hash = %proof.out_hash,
                "shaping stage done"
            );
            proofs.push(proof);
        }

        (current, proofs)
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for ShapingRunner {
    fn default() -> Self {
        Self::from_config(&ShapingConfig::default())
    }
}

/// blake3 digest of the JSON form of a candidate list
pub fn hash_records(records: &[CandidateRecord]) -> String {
    let bytes = serde_json::to_vec(records).unwrap_or_default();
    format!("blake3:{}", blake3::hash(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<CandidateRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_pipeline_id() {
        let runner = ShapingRunner::from_config(&ShapingConfig { max_results: Some(10) });
        assert_eq!(runner.pipeline_id(), "dedup→limit");
        assert_eq!(runner.len(), 2);
        assert_eq!(ShapingRunner::default().pipeline_id(), "dedup");
    }

    #[test]
    fn test_proofs_track_counts_and_hashes() {
        let input = records(json!([
            { "name": "A", "price": 1 },
            { "name": "A", "price": 1 },
            { "name": "B", "price": 2 },
            { "name": "C", "price": 3 }
        ]));

        let runner = ShapingRunner::from_config(&ShapingConfig { max_results: Some(2) });
        let (out, proofs) = runner.run(input);

        assert_eq!(out.len(), 2);
        assert_eq!(proofs.len(), 2);
        assert_eq!((proofs[0].in_count, proofs[0].out_count), (4, 3));
        assert_eq!((proofs[1].in_count, proofs[1].out_count), (3, 2));
        assert_eq!(proofs[0].out_hash, proofs[1].in_hash);
        assert_eq!(proofs[1].out_hash, hash_records(&out));
        assert!(proofs[0].in_hash.starts_with("blake3:"));
    }

    #[test]
    fn test_clean_input_keeps_hash() {
        let input = records(json!([{ "name": "A" }, { "name": "B" }]));
        let (_, proofs) = ShapingRunner::default().run(input);
        assert_eq!(proofs[0].in_hash, proofs[0].out_hash);
    }
}
