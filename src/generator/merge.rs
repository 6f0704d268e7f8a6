//! Top-down merge sort over inclusive ranges.
//!
//! Ties take from the left run, so the sort is stable. Every head-to-head
//! comparison is recorded; the tail copied after one run is exhausted is not
//! compared, only written.

use super::StepRecorder;

pub(super) fn record(rec: &mut StepRecorder) {
    if rec.len() > 1 {
        sort(rec, 0, rec.len() - 1);
    }
}

fn sort(rec: &mut StepRecorder, start: usize, end: usize) {
    if start < end {
        let mid = (start + end) / 2;
        sort(rec, start, mid);
        sort(rec, mid + 1, end);
        merge(rec, start, mid, end);
    }
}

fn merge(rec: &mut StepRecorder, start: usize, mid: usize, end: usize) {
    let mut merged = Vec::with_capacity(end - start + 1);
    let (mut i, mut j) = (start, mid + 1);

    while i <= mid && j <= end {
        rec.compare(i, j);
        if rec.value(i) <= rec.value(j) {
            merged.push(rec.value(i));
            i += 1;
        } else {
            merged.push(rec.value(j));
            j += 1;
        }
    }
    merged.extend((i..=mid).map(|k| rec.value(k)));
    merged.extend((j..=end).map(|k| rec.value(k)));

    for (offset, value) in merged.into_iter().enumerate() {
        rec.overwrite(start + offset, value);
    }
}
