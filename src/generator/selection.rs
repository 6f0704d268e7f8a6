//! Selection sort; swaps only when a smaller element was found.

use super::StepRecorder;

pub(super) fn record(rec: &mut StepRecorder) {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.compare(j, min_idx);
            if rec.value(j) < rec.value(min_idx) {
                min_idx = j;
            }
        }
        if min_idx != i {
            rec.swap(i, min_idx);
        }
    }
}
