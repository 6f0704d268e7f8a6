//! Saved visualizations
//!
//! A saved visualization is the `{algorithm, array, steps}` triple a session
//! was replaying, keyed by a store-assigned id and stamped with a creation
//! time. [`VisualizationStore`] is the seam the UI and CLI talk to;
//! [`MemoryStore`] backs tests and throwaway sessions, [`FileStore`] keeps one
//! JSON document per record on disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::algorithm::Algorithm;
use crate::errors::{InputError, StoreError};
use crate::steps::{StepLog, Value};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// How many summaries `list` returns when the caller has no preference
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// What the caller hands to [`VisualizationStore::create`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVisualization {
    pub algorithm: Algorithm,
    pub array: Vec<Value>,
    pub steps: StepLog,
}

impl NewVisualization {
    /// Reject records the replay driver could not use: an empty array, an
    /// empty log, or a step that points outside the array.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.array.is_empty() {
            return Err(InputError::Empty);
        }
        if self.steps.is_empty() {
            return Err(InputError::EmptyLog);
        }
        self.steps.validate(self.array.len())
    }
}

/// A stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualization {
    pub id: String,
    pub algorithm: Algorithm,
    pub array: Vec<Value>,
    pub steps: StepLog,
    /// Milliseconds since the Unix epoch
    pub created_at: u64,
}

impl Visualization {
    pub fn summary(&self) -> VisualizationSummary {
        VisualizationSummary {
            id: self.id.clone(),
            algorithm: self.algorithm,
            elements: self.array.len(),
            created_at: self.created_at,
        }
    }
}

/// Listing entry; the step log is left out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationSummary {
    pub id: String,
    pub algorithm: Algorithm,
    pub elements: usize,
    pub created_at: u64,
}

/// Acknowledgement returned by `create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saved {
    pub id: String,
    pub algorithm: Algorithm,
    pub created_at: u64,
}

/// Save/load service for step logs
pub trait VisualizationStore {
    /// Validate and persist a record, assigning its id and timestamp
    fn create(&mut self, record: NewVisualization) -> Result<Saved, StoreError>;

    /// Newest first, at most `limit` entries
    fn list(&self, limit: usize) -> Result<Vec<VisualizationSummary>, StoreError>;

    fn get(&self, id: &str) -> Result<Visualization, StoreError>;

    /// Remove a record; `NotFound` if there was none
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Sort newest first and keep at most `limit`.
///
/// Records created in the same millisecond fall back to id order so listings
/// are stable.
pub(crate) fn newest_first(
    mut summaries: Vec<VisualizationSummary>,
    limit: usize,
) -> Vec<VisualizationSummary> {
    summaries.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    summaries.truncate(limit);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::steps::Step;

    #[test]
    fn test_validate_defensive_rules() {
        let array = vec![3, 1, 2];
        let good = NewVisualization {
            algorithm: Algorithm::Bubble,
            steps: generate(Algorithm::Bubble, &array),
            array,
        };
        assert!(good.validate().is_ok());

        let empty_array = NewVisualization {
            array: Vec::new(),
            ..good.clone()
        };
        assert_eq!(empty_array.validate(), Err(InputError::Empty));

        let empty_log = NewVisualization {
            steps: StepLog::default(),
            ..good.clone()
        };
        assert_eq!(empty_log.validate(), Err(InputError::EmptyLog));

        let out_of_range = NewVisualization {
            steps: StepLog::new(vec![Step::swap(0, 3)]),
            ..good
        };
        assert!(matches!(
            out_of_range.validate(),
            Err(InputError::IndexOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn test_newest_first_orders_and_truncates() {
        let entry = |id: &str, created_at| VisualizationSummary {
            id: id.to_string(),
            algorithm: Algorithm::Merge,
            elements: 1,
            created_at,
        };
        let sorted = newest_first(
            vec![entry("a", 10), entry("b", 30), entry("c", 20), entry("d", 30)],
            3,
        );
        let ids: Vec<_> = sorted.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c"]);
    }

    #[test]
    fn test_ids_are_unique_hex() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
