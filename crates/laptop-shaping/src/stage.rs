//! Shaping stages: list-to-list transforms run by the `ShapingRunner`
use crate::dedup::deduplicate_with_outcome;
use laptop_core::CandidateRecord;

/// Contract of one shaping stage
pub trait ShapingStage: Send + Sync {
    /// Unique stage id (ex: "dedup.signature.v1")
    fn id(&self) -> &'static str;

    /// Same input always gives the same output (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    /// Transform the candidate list. Stages never fail; bad fields degrade.
    fn apply(&self, input: Vec<CandidateRecord>) -> Vec<CandidateRecord>;
}

/// Drops every record whose signature was already seen
#[derive(Debug, Default, Clone, Copy)]
pub struct DedupStage;

impl ShapingStage for DedupStage {
    fn id(&self) -> &'static str {
        "dedup.signature.v1"
    }

    fn apply(&self, input: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
        let outcome = deduplicate_with_outcome(input);
        if !outcome.is_clean() {
            tracing::debug!(dropped = outcome.dropped, kept = outcome.retained.len(), "dropped duplicate candidates");
        }
        outcome.retained
    }
}

/// Keeps the first `max` records
#[derive(Debug, Clone, Copy)]
pub struct LimitStage {
    pub max: usize,
}

impl ShapingStage for LimitStage {
    fn id(&self) -> &'static str {
        "limit.head.v1"
    }

    fn apply(&self, mut input: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
        input.truncate(self.max);
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CandidateRecord {
        CandidateRecord {
            name: Some(name.to_string()),
            ..CandidateRecord::default()
        }
    }

    #[test]
    fn test_limit_stage() {
        let stage = LimitStage { max: 2 };
        let out = stage.apply(vec![named("a"), named("b"), named("c")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].name.as_deref(), Some("b"));
        assert!(stage.deterministic());
    }

    #[test]
    fn test_dedup_stage() {
        let out = DedupStage.apply(vec![named("a"), named("a")]);
        assert_eq!(out.len(), 1);
        assert_eq!(DedupStage.id(), "dedup.signature.v1");
    }
}
