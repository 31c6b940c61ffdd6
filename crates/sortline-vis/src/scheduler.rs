//! Cancellable timers for playback.
//!
//! Neither timer reads the clock. Callers pass `now` in and ask for the
//! next deadline, so the same state machine runs under a tokio driver or
//! under a test that advances time by hand.

use std::time::{Duration, Instant};

/// How often elapsed time is refreshed while running.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Single-shot deferred step.
///
/// Holds at most one pending deadline: scheduling replaces whatever was
/// pending, and firing consumes it.
#[derive(Debug, Default)]
pub struct StepTimer {
    pending: Option<Instant>,
}

impl StepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the step at `at`. Returns true if a pending step was replaced.
    pub fn schedule(&mut self, at: Instant) -> bool {
        self.pending.replace(at).is_some()
    }

    /// Drop the pending step, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending step if it is due at `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(at) if at <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    since: Instant,
    banked: Duration,
    next: Instant,
}

/// Periodic elapsed-time accounting.
///
/// Elapsed time is `banked + (now - since)`. Restarting with the time
/// banked before a pause re-originates the count so paused intervals are
/// never included.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    armed: Option<Armed>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            armed: None,
        }
    }

    /// Start ticking at `now`, counting on from `banked`.
    pub fn start(&mut self, now: Instant, banked: Duration) {
        self.armed = Some(Armed {
            since: now,
            banked,
            next: now + self.period,
        });
    }

    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.armed.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|a| a.next)
    }

    /// Active time accumulated as of `now`, or `None` when stopped.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|a| a.banked + now.saturating_duration_since(a.since))
    }

    /// Report elapsed time if a period boundary has passed at `now`.
    ///
    /// Missed boundaries collapse into a single tick.
    pub fn fire(&mut self, now: Instant) -> Option<Duration> {
        let period = self.period;
        let armed = self.armed.as_mut()?;
        if now < armed.next {
            return None;
        }
        while armed.next <= now {
            armed.next += period;
        }
        Some(armed.banked + now.saturating_duration_since(armed.since))
    }
}
