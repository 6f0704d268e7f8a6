//! Step-log generation
//!
//! Each sort runs against a private copy of its input through a
//! [`StepRecorder`], which performs the primitive operation and appends the
//! matching [`Step`](crate::steps::Step) in the same call. Reading the
//! recorder's array is free; only comparisons, overwrites and swaps leave a
//! trace.
//!
//! [`generate`] is the single entry point and dispatches on [`Algorithm`].
//! The caller's slice is never mutated.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod recorder;
mod selection;

pub use recorder::StepRecorder;

use crate::algorithm::Algorithm;
use crate::errors::InputError;
use crate::steps::{StepLog, Value};

/// Record the step log `algorithm` produces when sorting `input`.
///
/// Empty and single-element inputs are already sorted and yield an empty log.
#[tracing::instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn generate(algorithm: Algorithm, input: &[Value]) -> StepLog {
    let mut recorder = StepRecorder::new(input);
    match algorithm {
        Algorithm::Merge => merge::record(&mut recorder),
        Algorithm::Quick => quick::record(&mut recorder),
        Algorithm::Bubble => bubble::record(&mut recorder),
        Algorithm::Selection => selection::record(&mut recorder),
        Algorithm::Insertion => insertion::record(&mut recorder),
    }
    let log = recorder.finish();
    tracing::debug!(steps = log.len(), "generated step log");
    log
}

/// Reject input the visualizer refuses to load: an empty array has nothing
/// to draw.
pub fn validate_input(input: &[Value]) -> Result<(), InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(())
}

/// Parse a user-supplied array such as `"5, 3,1 9"`.
///
/// Elements may be separated by commas and/or whitespace. The result is never
/// empty.
pub fn parse_array(text: &str) -> Result<Vec<Value>, InputError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Value>().map_err(|_| InputError::NotANumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate_input(&values)?;
    Ok(values)
}
