//! Single-slot cancellable tick timer
//!
//! The driver keeps at most one tick outstanding. Scheduling hands back a
//! [`TimerHandle`]; cancelling drops the pending slot, so a tick that was due
//! before `pause()` can no longer fire afterwards.

use std::time::{Duration, Instant};

/// Identifies one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: TimerHandle,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Option<Pending>,
    next_id: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick at `deadline`, replacing any tick already pending
    pub fn schedule(&mut self, deadline: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending { handle, deadline });
        handle
    }

    /// Drop the pending tick, if any, and return its handle
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|p| p.handle)
    }

    /// Cancel only if `handle` is still the pending tick
    pub fn cancel_handle(&mut self, handle: TimerHandle) -> bool {
        match self.pending {
            Some(p) if p.handle == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Time left before the pending tick is due (zero if overdue)
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Consume the pending tick if it is due at `now`
    pub fn fire(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.pending {
            Some(p) if p.deadline <= now => {
                self.pending = None;
                Some(p.handle)
            }
            _ => None,
        }
    }
}
