//! Step records and step logs
//!
//! A [`Step`] is one primitive operation an instrumented sort performed
//! against an index position. A [`StepLog`] is the ordered, immutable list of
//! steps recorded for one run; replaying its mutating steps against a copy of
//! the original input reproduces the sorted array.
//!
//! # Wire format
//!
//! Steps serialize as internally tagged objects:
//!
//! ```text
//! {"type":"compare","indices":[0,1]}
//! {"type":"overwrite","index":3,"value":42}
//! {"type":"swap","indices":[2,5]}
//! ```
//!
//! Any other `type` decodes to [`Step::Unknown`] so a stored log can still be
//! loaded; the replay driver then refuses the tick that reaches it.

use crate::errors::{InputError, ReplayError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element type of every array the visualizer sorts
pub type Value = i64;

/// A single recorded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Step {
    /// Two positions were compared; nothing changes
    Compare { indices: [usize; 2] },

    /// Position `index` was set to `value`
    Overwrite { index: usize, value: Value },

    /// Positions were exchanged
    Swap { indices: [usize; 2] },

    /// A record with a tag this build does not know
    #[serde(other)]
    Unknown,
}

impl Step {
    pub fn compare(i: usize, j: usize) -> Self {
        Step::Compare { indices: [i, j] }
    }

    pub fn overwrite(index: usize, value: Value) -> Self {
        Step::Overwrite { index, value }
    }

    pub fn swap(i: usize, j: usize) -> Self {
        Step::Swap { indices: [i, j] }
    }

    /// Short lowercase tag, matching the wire `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Compare { .. } => "compare",
            Step::Overwrite { .. } => "overwrite",
            Step::Swap { .. } => "swap",
            Step::Unknown => "unknown",
        }
    }

    /// Whether applying this step changes the working array
    pub fn is_mutating(&self) -> bool {
        matches!(self, Step::Overwrite { .. } | Step::Swap { .. })
    }

    /// Positions to highlight when this step is shown
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Step::Compare { indices } | Step::Swap { indices } => indices.to_vec(),
            Step::Overwrite { index, .. } => vec![index],
            Step::Unknown => Vec::new(),
        }
    }

    /// Check the step against an array of `len` elements without touching it.
    ///
    /// `position` is the step's offset in its log and is only used for the
    /// error report.
    pub fn check(&self, position: usize, len: usize) -> Result<(), InputError> {
        if let Step::Unknown = self {
            return Err(InputError::UnknownStep { position });
        }
        match self.indices().into_iter().find(|&idx| idx >= len) {
            Some(index) => Err(InputError::IndexOutOfRange {
                position,
                index,
                len,
            }),
            None => Ok(()),
        }
    }

    /// Apply the step to `array`.
    ///
    /// The step is validated in full before anything is written, so on error
    /// `array` is exactly as it was.
    pub fn apply(&self, position: usize, array: &mut [Value]) -> Result<(), ReplayError> {
        self.check(position, array.len())
            .map_err(|e| ReplayError::MalformedStep {
                cursor: position,
                reason: e.to_string(),
            })?;

        match *self {
            Step::Compare { .. } | Step::Unknown => {}
            Step::Overwrite { index, value } => array[index] = value,
            Step::Swap { indices: [i, j] } => array.swap(i, j),
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Compare { indices: [i, j] } => write!(f, "compare [{i}] <> [{j}]"),
            Step::Overwrite { index, value } => write!(f, "overwrite [{index}] = {value}"),
            Step::Swap { indices: [i, j] } => write!(f, "swap [{i}] <-> [{j}]"),
            Step::Unknown => f.write_str("unrecognized step"),
        }
    }
}

/// Per-kind tallies of a step log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounts {
    pub compares: usize,
    pub overwrites: usize,
    pub swaps: usize,
    pub unknown: usize,
}

/// An ordered, immutable sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new(steps: Vec<Step>) -> Self {
        StepLog { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    pub fn counts(&self) -> StepCounts {
        let mut counts = StepCounts::default();
        for step in &self.steps {
            match step {
                Step::Compare { .. } => counts.compares += 1,
                Step::Overwrite { .. } => counts.overwrites += 1,
                Step::Swap { .. } => counts.swaps += 1,
                Step::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    /// Check every step against an array of `len` elements, reporting the
    /// first offender
    pub fn validate(&self, len: usize) -> Result<(), InputError> {
        self.steps
            .iter()
            .enumerate()
            .try_for_each(|(position, step)| step.check(position, len))
    }

    /// Replay the whole log against a copy of `input` and return the result
    pub fn replay_onto(&self, input: &[Value]) -> Result<Vec<Value>, ReplayError> {
        let mut array = input.to_vec();
        for (position, step) in self.steps.iter().enumerate() {
            step.apply(position, &mut array)?;
        }
        Ok(array)
    }
}

impl From<Vec<Step>> for StepLog {
    fn from(steps: Vec<Step>) -> Self {
        StepLog::new(steps)
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_matches_tagged_objects() {
        let log = StepLog::new(vec![
            Step::compare(0, 1),
            Step::overwrite(3, 42),
            Step::swap(2, 5),
        ]);
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"compare","indices":[0,1]},{"type":"overwrite","index":3,"value":42},{"type":"swap","indices":[2,5]}]"#
        );
    }

    #[test]
    fn test_unknown_tag_decodes_to_marker() {
        let log: StepLog =
            serde_json::from_str(r#"[{"type":"compare","indices":[0,1]},{"type":"rotate"}]"#)
                .unwrap();
        assert_eq!(log.get(1), Some(&Step::Unknown));
        assert_eq!(log.counts().unknown, 1);
        assert_eq!(log.validate(2), Err(InputError::UnknownStep { position: 1 }));
    }

    #[test]
    fn test_apply_rejects_out_of_range_without_mutating() {
        let mut array = vec![5, 6, 7];
        let err = Step::swap(0, 3).apply(9, &mut array).unwrap_err();
        assert!(matches!(err, ReplayError::MalformedStep { cursor: 9, .. }));
        assert_eq!(array, vec![5, 6, 7]);

        let err = Step::overwrite(3, 1).apply(0, &mut array).unwrap_err();
        assert!(matches!(err, ReplayError::MalformedStep { cursor: 0, .. }));
        assert_eq!(array, vec![5, 6, 7]);
    }

    #[test]
    fn test_apply_mutates_only_for_overwrite_and_swap() {
        let mut array = vec![1, 2, 3];
        Step::compare(0, 2).apply(0, &mut array).unwrap();
        assert_eq!(array, vec![1, 2, 3]);
        Step::swap(0, 2).apply(1, &mut array).unwrap();
        assert_eq!(array, vec![3, 2, 1]);
        Step::overwrite(1, 9).apply(2, &mut array).unwrap();
        assert_eq!(array, vec![3, 9, 1]);
    }

    #[test]
    fn test_validate_reports_first_bad_position() {
        let log = StepLog::new(vec![
            Step::compare(0, 1),
            Step::overwrite(4, 0),
            Step::swap(7, 0),
        ]);
        assert_eq!(
            log.validate(3),
            Err(InputError::IndexOutOfRange {
                position: 1,
                index: 4,
                len: 3
            })
        );
        assert!(log.validate(8).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::compare(0, 1).to_string(), "compare [0] <> [1]");
        assert_eq!(Step::overwrite(2, -5).to_string(), "overwrite [2] = -5");
        assert_eq!(Step::swap(3, 4).to_string(), "swap [3] <-> [4]");
    }

    #[test]
    fn test_highlight_indices() {
        assert_eq!(Step::compare(4, 1).indices(), vec![4, 1]);
        assert_eq!(Step::overwrite(2, 0).indices(), vec![2]);
        assert!(Step::Unknown.indices().is_empty());
        assert!(!Step::compare(0, 1).is_mutating());
        assert!(Step::swap(0, 1).is_mutating());
    }
}
