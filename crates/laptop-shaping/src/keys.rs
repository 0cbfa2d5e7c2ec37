//! Display keys for shaped candidates.
//!
//! Keys only have to tell rows of one rendered list apart. They are not
//! stable across requests and must not be stored.

use crate::normalizer::IdentityFields;
use laptop_core::CandidateRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const KEY_PREFIX: &str = "rec";
pub const KEY_DELIMITER: &str = "|";

/// Key built from identity fields and position, ignoring any identifier
pub fn composite_key(record: &CandidateRecord, index: usize) -> String {
    let fields = IdentityFields::resolve(record);
    let index = index.to_string();

    let mut parts = Vec::with_capacity(7);
    parts.push(KEY_PREFIX);
    parts.extend(fields.parts());
    parts.push(&index);
    parts.join(KEY_DELIMITER)
}

/// `rec|<id>` when the service sent an identifier, otherwise
/// `rec|<name>|<gpu>|<ram>|<storage>|<price>|<index>`.
pub fn derive_key(record: &CandidateRecord, index: usize) -> String {
    match &record.id {
        Some(id) => format!("{}{}{}", KEY_PREFIX, KEY_DELIMITER, id),
        None => composite_key(record, index),
    }
}

/// A candidate with its display key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedCandidate {
    pub key: String,
    #[serde(flatten)]
    pub record: CandidateRecord,
}

/// Key every record of a final list.
///
/// Identifiers are trusted, but a repeated one would break uniqueness, so a
/// key already handed out falls back to the positional composite, and a
/// composite that still collides gets a `~n` suffix.
pub fn assign_keys(records: Vec<CandidateRecord>) -> Vec<KeyedCandidate> {
    let mut used: HashSet<String> = HashSet::with_capacity(records.len());

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let mut key = derive_key(&record, index);

            if used.contains(&key) {
                tracing::warn!(%key, index, "duplicate display key, falling back to positional key");
                key = composite_key(&record, index);
            }
            if used.contains(&key) {
                let base = key.clone();
                let mut n = 1usize;
                while used.contains(&key) {
                    key = format!("{}~{}", base, n);
                    n += 1;
                }
            }

            used.insert(key.clone());
            KeyedCandidate { key, record }
        })
        .collect()
}
