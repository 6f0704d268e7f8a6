//! Bubble sort: all n-1 passes, no early exit on a clean pass.

use super::StepRecorder;

pub(super) fn record(rec: &mut StepRecorder) {
    let n = rec.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            rec.compare(j, j + 1);
            if rec.value(j) > rec.value(j + 1) {
                rec.swap(j, j + 1);
            }
        }
    }
}
