// Integration tests for step-log generation

use sortty::algorithm::Algorithm;
use sortty::generator::{generate, parse_array};
use sortty::steps::{Step, Value};

/// Small deterministic pseudo-random arrays, including duplicates and
/// negatives
fn sample_inputs() -> Vec<Vec<Value>> {
    let mut inputs = vec![
        vec![],
        vec![7],
        vec![2, 1],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![3, 3, 3, 3],
        vec![70, 20, 90, 10, 50, 30, 60, 80, 40],
        vec![0, -4, 12, -4, 9, 0, 1],
    ];

    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for len in 2..=24 {
        let mut array = Vec::with_capacity(len);
        for _ in 0..len {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            array.push(((seed >> 33) % 41) as Value - 20);
        }
        inputs.push(array);
    }
    inputs
}

fn inversions(array: &[Value]) -> usize {
    let mut count = 0;
    for i in 0..array.len() {
        for j in i + 1..array.len() {
            if array[i] > array[j] {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_replay_sorts_every_input() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let log = generate(algorithm, &input);
            assert!(
                log.validate(input.len()).is_ok(),
                "{algorithm} produced an out-of-range step for {input:?}"
            );

            let replayed = log.replay_onto(&input).expect("replay failed");
            let mut expected = input.clone();
            expected.sort();
            assert_eq!(replayed, expected, "{algorithm} did not sort {input:?}");
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            assert_eq!(generate(algorithm, &input), generate(algorithm, &input));
        }
    }
}

#[test]
fn test_trivial_inputs_have_empty_logs() {
    for algorithm in Algorithm::ALL {
        assert!(generate(algorithm, &[]).is_empty());
        assert!(generate(algorithm, &[1]).is_empty());
    }
}

#[test]
fn test_quadratic_sorts_compare_every_pair_once() {
    for input in sample_inputs() {
        let n = input.len();
        let pairs = n * n.saturating_sub(1) / 2;
        assert_eq!(generate(Algorithm::Bubble, &input).counts().compares, pairs);
        assert_eq!(generate(Algorithm::Selection, &input).counts().compares, pairs);
    }
}

#[test]
fn test_bubble_swaps_once_per_inversion() {
    for input in sample_inputs() {
        let counts = generate(Algorithm::Bubble, &input).counts();
        assert_eq!(counts.swaps, inversions(&input));
        assert_eq!(counts.overwrites, 0);
    }
}

#[test]
fn test_selection_swaps_at_most_once_per_position() {
    for input in sample_inputs() {
        let counts = generate(Algorithm::Selection, &input).counts();
        assert!(counts.swaps <= input.len().saturating_sub(1));
    }
}

#[test]
fn test_merge_and_insertion_only_overwrite() {
    for input in sample_inputs() {
        assert_eq!(generate(Algorithm::Merge, &input).counts().swaps, 0);
        assert_eq!(generate(Algorithm::Insertion, &input).counts().swaps, 0);
        assert_eq!(generate(Algorithm::Quick, &input).counts().overwrites, 0);
    }
}

#[test]
fn test_bubble_three_elements_step_by_step() {
    let input = [3, 1, 2];
    let log = generate(Algorithm::Bubble, &input);
    assert_eq!(
        log.as_slice(),
        &[
            Step::compare(0, 1),
            Step::swap(0, 1),
            Step::compare(1, 2),
            Step::swap(1, 2),
            Step::compare(0, 1),
        ]
    );

    // Intermediate arrays after each step
    let mut array = input.to_vec();
    let mut frames = Vec::new();
    for (position, step) in log.iter().enumerate() {
        step.apply(position, &mut array).unwrap();
        frames.push(array.clone());
    }
    assert_eq!(
        frames,
        vec![
            vec![3, 1, 2],
            vec![1, 3, 2],
            vec![1, 3, 2],
            vec![1, 2, 3],
            vec![1, 2, 3],
        ]
    );
}

#[test]
fn test_parsed_array_feeds_generator() {
    let input = parse_array("9, 8 7,6").unwrap();
    let sorted = generate(Algorithm::Insertion, &input)
        .replay_onto(&input)
        .unwrap();
    assert_eq!(sorted, vec![6, 7, 8, 9]);
}
