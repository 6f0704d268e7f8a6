//! Replay driver
//!
//! [`ReplayDriver`] owns one visualization session: the working array, the
//! step log it replays, a cursor into that log and the play/pause state.
//! Each tick applies exactly one step, advances the cursor and records which
//! positions to highlight. Independent drivers share nothing, so two sessions
//! can run side by side.
//!
//! # Timing
//!
//! The driver never sleeps. A caller (the TUI event loop) passes the current
//! time to [`ReplayDriver::poll`]; a tick fires only when the
//! [`TickScheduler`] says one is due, and the next tick is scheduled only
//! after the current one, including its [`FrameSink`] callback, has finished.
//! [`ReplayDriver::pause`] and [`ReplayDriver::reset`] cancel the pending
//! tick, and a tick that fires anyway while not playing is ignored.
//!
//! # States
//!
//! ```text
//! Idle --load--> Paused --play--> Playing --last step--> Complete
//!                  ^                 |
//!                  +-----pause-------+
//! ```
//!
//! `reset` returns to `Idle` from anywhere.

mod scheduler;

pub use scheduler::{TickScheduler, TimerHandle};

use crate::algorithm::Algorithm;
use crate::errors::ReplayError;
use crate::generator::{generate, validate_input};
use crate::steps::{Step, StepLog, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Array shown before anything is loaded and restored by `reset`
pub const DEFAULT_ARRAY: [Value; 9] = [70, 20, 90, 10, 50, 30, 60, 80, 40];

/// Floor for the tick interval, however high the speed
pub const MIN_TICK_DELAY: Duration = Duration::from_millis(10);

/// Slowest selectable speed
pub const MIN_SPEED: u32 = 1;

/// Fastest selectable speed
pub const MAX_SPEED: u32 = 20;

/// Interval between ticks for a given speed: `1000 - speed * 45` ms, never
/// below [`MIN_TICK_DELAY`]
pub fn delay_for_speed(speed: u32) -> Duration {
    let millis = 1000 - i64::from(speed) * 45;
    let floor = MIN_TICK_DELAY.as_millis() as i64;
    Duration::from_millis(millis.max(floor) as u64)
}

/// Playback state of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing loaded
    Idle,
    /// Ticking on a timer
    Playing,
    /// Loaded, not ticking
    Paused,
    /// Every step has been applied
    Complete,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "IDLE",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Paused => "PAUSED",
            PlaybackState::Complete => "COMPLETE",
        }
    }
}

/// What a single applied step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickEvent {
    /// Offset of the applied step in the log
    pub position: usize,
    pub step: Step,
    /// Positions the step touched
    pub highlights: Vec<usize>,
}

/// Receives the array and its highlighted positions after every tick
pub trait FrameSink {
    fn frame(&mut self, array: &[Value], highlights: &[usize]);
}

impl<F> FrameSink for F
where
    F: FnMut(&[Value], &[usize]),
{
    fn frame(&mut self, array: &[Value], highlights: &[usize]) {
        self(array, highlights)
    }
}

/// Sink for callers that only read the driver's state afterwards
pub struct NullSink;

impl FrameSink for NullSink {
    fn frame(&mut self, _array: &[Value], _highlights: &[usize]) {}
}

/// One replay session
#[derive(Debug)]
pub struct ReplayDriver {
    /// Array restored by `reset`
    default_array: Vec<Value>,

    /// Snapshot the current log was generated against
    source: Vec<Value>,

    /// Array mutated in place by replay
    working: Vec<Value>,

    log: Arc<StepLog>,
    algorithm: Algorithm,
    cursor: usize,
    state: PlaybackState,

    /// Positions touched by the most recent step
    highlights: Vec<usize>,

    scheduler: TickScheduler,
}

impl Default for ReplayDriver {
    fn default() -> Self {
        Self::with_array(DEFAULT_ARRAY.to_vec())
    }
}

impl ReplayDriver {
    /// Create an idle driver whose reset array is `default_array`.
    ///
    /// Fails if `default_array` is empty.
    pub fn new(default_array: Vec<Value>) -> Result<Self, ReplayError> {
        validate_input(&default_array)?;
        Ok(Self::with_array(default_array))
    }

    fn with_array(default_array: Vec<Value>) -> Self {
        ReplayDriver {
            source: default_array.clone(),
            working: default_array.clone(),
            default_array,
            log: Arc::new(StepLog::default()),
            algorithm: Algorithm::default(),
            cursor: 0,
            state: PlaybackState::Idle,
            highlights: Vec::new(),
            scheduler: TickScheduler::new(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn working_array(&self) -> &[Value] {
        &self.working
    }

    /// The array the current log was generated against
    pub fn source_array(&self) -> &[Value] {
        &self.source
    }

    pub fn default_array(&self) -> &[Value] {
        &self.default_array
    }

    pub fn step_log(&self) -> &Arc<StepLog> {
        &self.log
    }

    pub fn highlights(&self) -> &[usize] {
        &self.highlights
    }

    /// Steps not yet applied
    pub fn remaining(&self) -> usize {
        self.log.len().saturating_sub(self.cursor)
    }

    /// When the next tick is due, if one is scheduled
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until(now)
    }

    /// Generate the log for `algorithm` over `source` and get ready to play.
    #[tracing::instrument(level = "debug", skip(self, source), fields(len = source.len()))]
    pub fn load(&mut self, algorithm: Algorithm, source: &[Value]) -> Result<(), ReplayError> {
        validate_input(source)?;
        let log = generate(algorithm, source);
        self.install(algorithm, source.to_vec(), Arc::new(log));
        Ok(())
    }

    /// Replay a previously recorded log without regenerating it.
    ///
    /// The steps are not checked here; a bad step fails the tick that
    /// reaches it.
    pub fn load_record(
        &mut self,
        algorithm: Algorithm,
        array: Vec<Value>,
        steps: Arc<StepLog>,
    ) -> Result<(), ReplayError> {
        validate_input(&array)?;
        self.install(algorithm, array, steps);
        Ok(())
    }

    fn install(&mut self, algorithm: Algorithm, source: Vec<Value>, log: Arc<StepLog>) {
        self.scheduler.cancel();
        self.working = source.clone();
        self.source = source;
        self.log = log;
        self.algorithm = algorithm;
        self.cursor = 0;
        self.highlights.clear();
        self.state = PlaybackState::Paused;
        tracing::debug!(%algorithm, steps = self.log.len(), "loaded step log");
    }

    /// Switch to `algorithm`, discarding the current session first if it is
    /// playing or has a log.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), ReplayError> {
        if self.state == PlaybackState::Playing || !self.log.is_empty() {
            self.reset();
        }
        let source = self.source.clone();
        self.load(algorithm, &source)
    }

    /// Start ticking. The first tick is due immediately.
    ///
    /// Only a paused driver can start playing; returns whether it did. A
    /// paused driver with nothing left to apply moves straight to `Complete`.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        if self.remaining() == 0 {
            self.state = PlaybackState::Complete;
            return false;
        }
        self.state = PlaybackState::Playing;
        self.scheduler.schedule(now);
        tracing::debug!(cursor = self.cursor, "playback started");
        true
    }

    /// Stop ticking and cancel the pending tick. Does nothing unless playing.
    pub fn pause(&mut self) {
        self.scheduler.cancel();
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            tracing::debug!(cursor = self.cursor, "playback paused");
        }
    }

    /// Discard the session: default array, empty log, cursor at zero.
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.source = self.default_array.clone();
        self.working = self.default_array.clone();
        self.log = Arc::new(StepLog::default());
        self.cursor = 0;
        self.highlights.clear();
        self.state = PlaybackState::Idle;
        tracing::debug!("session reset");
    }

    /// Apply the step under the cursor regardless of play state.
    ///
    /// Returns `Ok(None)` when there is nothing left to apply. On error the
    /// working array and cursor are unchanged.
    pub fn step(&mut self) -> Result<Option<TickEvent>, ReplayError> {
        let Some(step) = self.log.get(self.cursor).copied() else {
            if !self.log.is_empty() {
                self.complete();
            }
            return Ok(None);
        };

        step.apply(self.cursor, &mut self.working)?;

        let position = self.cursor;
        self.cursor += 1;
        self.highlights = step.indices();
        tracing::trace!(position, kind = step.kind(), "applied step");

        if self.cursor == self.log.len() {
            self.complete();
        }

        Ok(Some(TickEvent {
            position,
            step,
            highlights: self.highlights.clone(),
        }))
    }

    fn complete(&mut self) {
        self.scheduler.cancel();
        if self.state != PlaybackState::Complete {
            tracing::debug!(steps = self.log.len(), "replay complete");
        }
        self.state = PlaybackState::Complete;
    }

    /// Timer path: apply one step, but only while playing.
    pub fn tick(&mut self) -> Result<Option<TickEvent>, ReplayError> {
        if self.state != PlaybackState::Playing {
            return Ok(None);
        }
        self.step()
    }

    /// Fire the pending tick if it is due at `now`.
    ///
    /// After a successful tick the frame goes to `sink`, and only then is the
    /// next tick scheduled `delay_for_speed(speed)` later. A failing step
    /// pauses playback and is returned to the caller.
    pub fn poll(
        &mut self,
        now: Instant,
        speed: u32,
        sink: &mut dyn FrameSink,
    ) -> Result<Option<TickEvent>, ReplayError> {
        if self.scheduler.fire(now).is_none() {
            return Ok(None);
        }

        match self.tick() {
            Ok(Some(event)) => {
                sink.frame(&self.working, &self.highlights);
                if self.state == PlaybackState::Playing {
                    self.scheduler.schedule(now + delay_for_speed(speed));
                }
                Ok(Some(event))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                tracing::warn!(cursor = self.cursor, error = %err, "tick failed");
                self.pause();
                Err(err)
            }
        }
    }

    /// Apply every remaining step without a timer, feeding each frame to
    /// `sink`. Returns how many steps were applied.
    pub fn run_to_completion(&mut self, sink: &mut dyn FrameSink) -> Result<usize, ReplayError> {
        self.scheduler.cancel();
        let mut applied = 0;
        while self.step()?.is_some() {
            sink.frame(&self.working, &self.highlights);
            applied += 1;
        }
        Ok(applied)
    }
}
