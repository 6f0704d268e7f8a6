// Working copy plus the log of everything done to it

use crate::steps::{Step, StepLog, Value};

/// Sorting workspace that records every primitive operation.
///
/// The sort algorithms only ever touch their array through this type, so the
/// emitted log and the private copy cannot drift apart.
#[derive(Debug)]
pub struct StepRecorder {
    array: Vec<Value>,
    steps: Vec<Step>,
}

impl StepRecorder {
    /// Start recording against a copy of `input`
    pub fn new(input: &[Value]) -> Self {
        StepRecorder {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Read a value without recording anything
    pub fn value(&self, index: usize) -> Value {
        self.array[index]
    }

    /// Record a comparison of positions `i` and `j`
    pub fn compare(&mut self, i: usize, j: usize) {
        self.steps.push(Step::compare(i, j));
    }

    /// Write `value` at `index` and record it
    pub fn overwrite(&mut self, index: usize, value: Value) {
        self.array[index] = value;
        self.steps.push(Step::overwrite(index, value));
    }

    /// Exchange positions `i` and `j` and record it (also when `i == j`)
    pub fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        self.steps.push(Step::swap(i, j));
    }

    /// The private copy in its current state
    pub fn array(&self) -> &[Value] {
        &self.array
    }

    pub fn finish(self) -> StepLog {
        StepLog::new(self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_copy_and_log_in_sync() {
        let input = [4, 8, 15];
        let mut rec = StepRecorder::new(&input);
        rec.compare(0, 2);
        rec.swap(0, 2);
        rec.overwrite(1, 16);
        rec.swap(1, 1);

        assert_eq!(rec.array(), &[15, 16, 4]);
        let log = rec.finish();
        assert_eq!(log.len(), 4);
        assert_eq!(log.replay_onto(&input).unwrap(), vec![15, 16, 4]);
        assert_eq!(input, [4, 8, 15]);
    }
}
