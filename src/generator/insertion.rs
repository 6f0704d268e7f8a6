//! Insertion sort.
//!
//! A comparison is recorded for each predecessor that actually shifts; the
//! comparison that stops the scan is not recorded. Every shift and the final
//! placement of the key are overwrites.

use super::StepRecorder;

pub(super) fn record(rec: &mut StepRecorder) {
    for i in 1..rec.len() {
        let key = rec.value(i);
        let mut slot = i;
        while slot > 0 && rec.value(slot - 1) > key {
            rec.compare(slot - 1, i);
            let shifted = rec.value(slot - 1);
            rec.overwrite(slot, shifted);
            slot -= 1;
        }
        rec.overwrite(slot, key);
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::generator::generate;
    use crate::steps::Step;

    #[test]
    fn test_shifts_then_places_key() {
        let log = generate(Algorithm::Insertion, &[3, 1, 2]);
        assert_eq!(
            log.as_slice(),
            &[
                Step::compare(0, 1),
                Step::overwrite(1, 3),
                Step::overwrite(0, 1),
                Step::compare(1, 2),
                Step::overwrite(2, 3),
                Step::overwrite(1, 2),
            ]
        );
    }

    #[test]
    fn test_sorted_input_only_places_keys() {
        let log = generate(Algorithm::Insertion, &[1, 2, 3, 4]);
        let counts = log.counts();
        assert_eq!(counts.compares, 0);
        assert_eq!(counts.overwrites, 3);
    }
}
