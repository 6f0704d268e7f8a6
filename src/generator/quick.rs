//! Quick sort with the Lomuto partition scheme (last element as pivot).

use super::StepRecorder;

pub(super) fn record(rec: &mut StepRecorder) {
    if rec.len() > 1 {
        sort(rec, 0, rec.len() - 1);
    }
}

fn sort(rec: &mut StepRecorder, low: usize, high: usize) {
    if low < high {
        let pivot_at = partition(rec, low, high);
        if pivot_at > low {
            sort(rec, low, pivot_at - 1);
        }
        sort(rec, pivot_at + 1, high);
    }
}

/// Partition `low..=high` around `high` and return the pivot's final position
fn partition(rec: &mut StepRecorder, low: usize, high: usize) -> usize {
    let pivot = rec.value(high);
    let mut boundary = low;

    for j in low..high {
        rec.compare(j, high);
        if rec.value(j) < pivot {
            rec.swap(boundary, j);
            boundary += 1;
        }
    }

    // Recorded even when boundary == high.
    rec.swap(boundary, high);
    boundary
}
