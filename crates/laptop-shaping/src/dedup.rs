//! First-occurrence-wins deduplication by candidate signature.

use crate::normalizer::CandidateSignature;
use laptop_core::CandidateRecord;
use std::collections::HashSet;

/// Outcome of a deduplication pass
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Kept records, in input order
    pub retained: Vec<CandidateRecord>,
    /// Signatures of everything retained
    pub seen: HashSet<CandidateSignature>,
    /// How many records were dropped as duplicates
    pub dropped: usize,
}

impl DedupOutcome {
    pub fn is_clean(&self) -> bool {
        self.dropped == 0
    }
}

/// Fold the input into retained records plus the signatures seen so far.
/// A record is kept only the first time its signature appears.
pub fn deduplicate_with_outcome(
    records: impl IntoIterator<Item = CandidateRecord>,
) -> DedupOutcome {
    records
        .into_iter()
        .fold(DedupOutcome::default(), |mut acc, record| {
            if acc.seen.insert(CandidateSignature::of(&record)) {
                acc.retained.push(record);
            } else {
                acc.dropped += 1;
            }
            acc
        })
}

/// Order-preserving deduplication
pub fn deduplicate(records: impl IntoIterator<Item = CandidateRecord>) -> Vec<CandidateRecord> {
    deduplicate_with_outcome(records).retained
}
