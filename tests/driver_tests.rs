// Integration tests for the replay driver

use std::sync::Arc;
use std::time::{Duration, Instant};

use sortty::algorithm::Algorithm;
use sortty::driver::{delay_for_speed, NullSink, PlaybackState, ReplayDriver, DEFAULT_ARRAY};
use sortty::errors::ReplayError;
use sortty::steps::{Step, StepLog, Value};

const SPEED: u32 = 20;

#[test]
fn test_timed_playback_runs_to_complete() {
    let mut driver = ReplayDriver::default();
    driver.load(Algorithm::Bubble, &[3, 1, 2]).unwrap();
    assert_eq!(driver.state(), PlaybackState::Paused);

    let start = Instant::now();
    assert!(driver.play(start));

    let mut frames: Vec<(Vec<Value>, Vec<usize>)> = Vec::new();
    let mut sink = |array: &[Value], highlights: &[usize]| {
        frames.push((array.to_vec(), highlights.to_vec()));
    };

    let mut now = start;
    for _ in 0..5 {
        let event = driver.poll(now, SPEED, &mut sink).unwrap();
        assert!(event.is_some());
        now += delay_for_speed(SPEED);
    }
    assert_eq!(driver.state(), PlaybackState::Complete);
    assert_eq!(driver.working_array(), &[1, 2, 3]);
    assert_eq!(driver.next_tick_in(now), None);

    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0], (vec![3, 1, 2], vec![0, 1]));
    assert_eq!(frames[1], (vec![1, 3, 2], vec![0, 1]));
    assert_eq!(frames[3], (vec![1, 2, 3], vec![1, 2]));
}

#[test]
fn test_tick_waits_for_its_deadline() {
    let mut driver = ReplayDriver::default();
    driver.load(Algorithm::Selection, &[4, 3, 2, 1]).unwrap();
    let start = Instant::now();
    driver.play(start);

    assert!(driver.poll(start, 1, &mut NullSink).unwrap().is_some());
    let early = start + delay_for_speed(1) - Duration::from_millis(1);
    assert!(driver.poll(early, 1, &mut NullSink).unwrap().is_none());
    assert_eq!(driver.cursor(), 1);

    let due = start + delay_for_speed(1);
    assert!(driver.poll(due, 1, &mut NullSink).unwrap().is_some());
    assert_eq!(driver.cursor(), 2);
}

#[test]
fn test_pause_stops_mutation() {
    let mut driver = ReplayDriver::default();
    driver.load(Algorithm::Quick, &DEFAULT_ARRAY).unwrap();
    let start = Instant::now();
    driver.play(start);
    driver.poll(start, SPEED, &mut NullSink).unwrap();
    driver.pause();
    assert_eq!(driver.state(), PlaybackState::Paused);

    let frozen = driver.working_array().to_vec();
    let cursor = driver.cursor();

    let later = start + Duration::from_secs(60);
    assert!(driver.poll(later, SPEED, &mut NullSink).unwrap().is_none());
    // A stray timer firing after pause is ignored
    assert!(driver.tick().unwrap().is_none());
    assert_eq!(driver.working_array(), frozen.as_slice());
    assert_eq!(driver.cursor(), cursor);

    // Resuming picks up where it left off
    assert!(driver.play(later));
    driver.poll(later, SPEED, &mut NullSink).unwrap();
    assert_eq!(driver.cursor(), cursor + 1);
}

#[test]
fn test_malformed_step_leaves_state_untouched() {
    let mut driver = ReplayDriver::default();
    let log = StepLog::new(vec![Step::swap(0, 1), Step::swap(0, 5)]);
    driver
        .load_record(Algorithm::Bubble, vec![1, 2], Arc::new(log))
        .unwrap();

    let start = Instant::now();
    driver.play(start);
    driver.poll(start, SPEED, &mut NullSink).unwrap();
    assert_eq!(driver.working_array(), &[2, 1]);

    let next = start + delay_for_speed(SPEED);
    let err = driver.poll(next, SPEED, &mut NullSink).unwrap_err();
    assert!(matches!(err, ReplayError::MalformedStep { cursor: 1, .. }));
    assert_eq!(driver.cursor(), 1);
    assert_eq!(driver.working_array(), &[2, 1]);
    assert_eq!(driver.state(), PlaybackState::Paused);
}

#[test]
fn test_unknown_step_from_json_fails_its_tick() {
    let log: StepLog =
        serde_json::from_str(r#"[{"type":"compare","indices":[0,1]},{"type":"shuffle"}]"#)
            .unwrap();
    let mut driver = ReplayDriver::default();
    driver
        .load_record(Algorithm::Merge, vec![5, 6], Arc::new(log))
        .unwrap();

    assert!(driver.step().unwrap().is_some());
    let err = driver.step().unwrap_err();
    assert!(matches!(err, ReplayError::MalformedStep { cursor: 1, .. }));
    assert_eq!(driver.cursor(), 1);
}

#[test]
fn test_switching_algorithm_resets_session() {
    let mut driver = ReplayDriver::default();
    driver.load(Algorithm::Bubble, &[3, 1, 2]).unwrap();
    driver.play(Instant::now());
    driver.step().unwrap();

    driver.select_algorithm(Algorithm::Insertion).unwrap();
    assert_eq!(driver.state(), PlaybackState::Paused);
    assert_eq!(driver.algorithm(), Algorithm::Insertion);
    assert_eq!(driver.cursor(), 0);
    assert_eq!(driver.working_array(), &DEFAULT_ARRAY);
    assert!(!driver.step_log().is_empty());
    assert!(driver.next_tick_in(Instant::now()).is_none());
}

#[test]
fn test_reset_restores_default_array() {
    let mut driver = ReplayDriver::new(vec![9, 8, 7]).unwrap();
    driver.load(Algorithm::Merge, &[5, 4, 3, 2]).unwrap();
    driver.run_to_completion(&mut NullSink).unwrap();
    assert_eq!(driver.state(), PlaybackState::Complete);

    driver.reset();
    assert_eq!(driver.state(), PlaybackState::Idle);
    assert_eq!(driver.working_array(), &[9, 8, 7]);
    assert!(driver.step_log().is_empty());
    assert!(!driver.play(Instant::now()));
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(ReplayDriver::new(Vec::new()).is_err());
    let mut driver = ReplayDriver::default();
    assert!(driver.load(Algorithm::Quick, &[]).is_err());
    assert_eq!(driver.state(), PlaybackState::Idle);
}

#[test]
fn test_independent_drivers_do_not_interfere() {
    let mut a = ReplayDriver::default();
    let mut b = ReplayDriver::default();
    a.load(Algorithm::Bubble, &[2, 1]).unwrap();
    b.load(Algorithm::Bubble, &[2, 1]).unwrap();

    a.run_to_completion(&mut NullSink).unwrap();
    assert_eq!(a.working_array(), &[1, 2]);
    assert_eq!(b.working_array(), &[2, 1]);
    assert_eq!(b.cursor(), 0);
    assert_eq!(b.state(), PlaybackState::Paused);
}

#[test]
fn test_run_to_completion_counts_steps() {
    let mut driver = ReplayDriver::default();
    driver.load(Algorithm::Selection, &DEFAULT_ARRAY).unwrap();
    let total = driver.step_log().len();
    let applied = driver.run_to_completion(&mut NullSink).unwrap();
    assert_eq!(applied, total);
    assert_eq!(driver.remaining(), 0);
    assert_eq!(driver.working_array(), &[10, 20, 30, 40, 50, 60, 70, 80, 90]);
}
