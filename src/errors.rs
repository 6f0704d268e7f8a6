//! Error types for step-log generation, replay and persistence
//!
//! Three families, one per layer:
//!
//! - [`InputError`]: the caller handed us something we refuse to sort or store
//!   (empty array, a token that is not a number, an unknown algorithm name, a
//!   step pointing outside its array).
//! - [`ReplayError`]: the replay driver hit a step it cannot apply. The tick
//!   is aborted and the cursor stays put.
//! - [`StoreError`]: the persistence layer could not find, read or write a
//!   record.
//!
//! None of these are fatal to the process; the UI and CLI report them and
//! carry on.

use thiserror::Error;

/// Rejected input, reported before any work is done
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The array to sort (or store) has no elements
    #[error("array must contain at least one element")]
    Empty,

    /// A user-supplied array element did not parse as an integer
    #[error("'{token}' is not a number")]
    NotANumber { token: String },

    /// The algorithm name is not one of the five supported sorts
    #[error("unknown algorithm '{name}' (expected one of merge, quick, bubble, selection, insertion)")]
    UnknownAlgorithm { name: String },

    /// A step references a position outside the array it is meant for
    #[error("step {position} references index {index}, array has {len} element(s)")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    /// A step log carries a record type this build does not understand
    #[error("step {position} has an unrecognized type")]
    UnknownStep { position: usize },

    /// There is nothing to save
    #[error("step log is empty")]
    EmptyLog,
}

/// Failure while applying a step to the working array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The step at `cursor` could not be applied; nothing was mutated
    #[error("malformed step at position {cursor}: {reason}")]
    MalformedStep { cursor: usize, reason: String },

    /// `load` was called with input the generator refuses
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id
    #[error("visualization '{id}' not found")]
    NotFound { id: String },

    /// The record failed validation and was not written
    #[error("invalid visualization: {0}")]
    Invalid(#[from] InputError),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_problem() {
        assert_eq!(
            InputError::NotANumber {
                token: "x1".to_string()
            }
            .to_string(),
            "'x1' is not a number"
        );
        assert!(InputError::IndexOutOfRange {
            position: 4,
            index: 9,
            len: 3
        }
        .to_string()
        .contains("index 9"));
        assert!(ReplayError::MalformedStep {
            cursor: 2,
            reason: "bad".to_string()
        }
        .to_string()
        .starts_with("malformed step at position 2"));
    }

    #[test]
    fn store_not_found_is_detectable() {
        let err = StoreError::not_found("abc");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("abc"));
        assert!(!StoreError::Invalid(InputError::Empty).is_not_found());
    }

    #[test]
    fn input_error_converts_into_replay_error() {
        let err: ReplayError = InputError::Empty.into();
        assert_eq!(err, ReplayError::Input(InputError::Empty));
    }
}
