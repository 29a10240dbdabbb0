//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Provides the frame clock plus pure functions for progress and interpolation.
//! Animations never read the wall clock directly; they ask a [`Clock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use scrollable_core::Position;

/// Source of "now" for the animation runner
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for deterministic stepping. Clones share one time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Fraction of `duration` elapsed between `start` and `now`, in [0, 1].
/// A zero duration is complete immediately.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Time left until `duration` has elapsed
#[inline]
pub fn remaining(start: Instant, now: Instant, duration: Duration) -> Duration {
    duration.saturating_sub(now.saturating_duration_since(start))
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolate both axes with the same factor
#[inline]
pub fn lerp_position(from: Position, to: Position, t: f64) -> Position {
    Position {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
    }
}
