//! L3 Molecular Layer: Animation runner
//!
//! Drives one animation from its start position to its target over the
//! effective duration: `Starting -> Animating -> {Completed | Cancelled}`.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use scrollable_core::{Position, ScrollTarget};

use super::callbacks::{AnimationHandle, AnimationId, CancelReason, ScrollCallbacks};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_position, progress, remaining};

/// Lifecycle phase of a running animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Starting,
    Animating,
    Completed,
    Cancelled,
}

/// How an animation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    Completed { jumped_to_end: bool },
    Cancelled { reason: CancelReason },
}

/// Active scroll animation state
#[derive(Debug)]
pub struct RunningAnimation {
    handle: AnimationHandle,
    start_time: Instant,
    easing: EasingType,
    callbacks: ScrollCallbacks,
    phase: AnimationPhase,
    cancel_reason: Option<CancelReason>,
}

impl RunningAnimation {
    pub fn new(
        id: AnimationId,
        start_position: Position,
        target_position: Position,
        start_time: Instant,
        duration: Duration,
        easing: EasingType,
        callbacks: ScrollCallbacks,
    ) -> Self {
        Self {
            handle: AnimationHandle {
                id,
                start_position,
                target_position,
                duration,
            },
            start_time,
            easing,
            callbacks,
            phase: AnimationPhase::Starting,
            cancel_reason: None,
        }
    }

    pub fn handle(&self) -> &AnimationHandle {
        &self.handle
    }

    pub fn id(&self) -> AnimationId {
        self.handle.id
    }

    pub fn start_position(&self) -> Position {
        self.handle.start_position
    }

    pub fn target_position(&self) -> Position {
        self.handle.target_position
    }

    pub fn effective_duration(&self) -> Duration {
        self.handle.duration
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn cancel_reason(&self) -> Option<CancelReason> {
        self.cancel_reason
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, AnimationPhase::Completed | AnimationPhase::Cancelled)
    }

    /// Fire `start` once, before the first position update
    pub fn begin(&mut self) {
        if self.phase != AnimationPhase::Starting {
            return;
        }
        debug!(
            animation = %self.handle.id,
            from = %self.handle.start_position,
            to = %self.handle.target_position,
            duration = ?self.handle.duration,
            "Scroll animation started"
        );
        self.phase = AnimationPhase::Animating;
        self.callbacks.dispatch_start(&self.handle);
    }

    /// Advance one frame at `now`, writing the interpolated position.
    ///
    /// Returns the outcome once the effective duration has elapsed. The final
    /// frame writes the target position whatever the target reported before.
    pub fn advance<T: ScrollTarget + ?Sized>(
        &mut self,
        target: &mut T,
        now: Instant,
    ) -> Option<AnimationOutcome> {
        if self.phase != AnimationPhase::Animating {
            return None;
        }

        let duration = self.handle.duration;
        if is_complete(self.start_time, now, duration) {
            let end = self.handle.target_position;
            target.set_position(end);
            self.callbacks
                .dispatch_frame(&self.handle, end, 1.0, Duration::ZERO);
            return Some(self.finish(false));
        }

        let t = progress(self.start_time, now, duration);
        let eased_t = self.easing.apply(t);
        let position = lerp_position(
            self.handle.start_position,
            self.handle.target_position,
            eased_t,
        );
        target.set_position(position);
        trace!(animation = %self.handle.id, progress = t, position = %position, "Scroll frame");
        self.callbacks.dispatch_frame(
            &self.handle,
            position,
            t,
            remaining(self.start_time, now, duration),
        );
        None
    }

    /// Complete now: `done → complete → always`
    pub fn finish(&mut self, jumped_to_end: bool) -> AnimationOutcome {
        let outcome = AnimationOutcome::Completed { jumped_to_end };
        if self.is_finished() {
            return outcome;
        }
        self.phase = AnimationPhase::Completed;
        debug!(animation = %self.handle.id, jumped_to_end, "Scroll animation completed");
        self.callbacks.dispatch_completed(&self.handle, jumped_to_end);
        outcome
    }

    /// Write the target position and complete with `jumpedToEnd = true`
    pub fn jump_to_end<T: ScrollTarget + ?Sized>(&mut self, target: &mut T) -> AnimationOutcome {
        if !self.is_finished() {
            target.set_position(self.handle.target_position);
        }
        self.finish(true)
    }

    /// Halt before completion: `fail → always` with `{cancelled: reason}`
    pub fn cancel(&mut self, reason: CancelReason) -> AnimationOutcome {
        let outcome = AnimationOutcome::Cancelled { reason };
        if self.is_finished() {
            return outcome;
        }
        self.phase = AnimationPhase::Cancelled;
        self.cancel_reason = Some(reason);
        debug!(animation = %self.handle.id, %reason, "Scroll animation cancelled");
        self.callbacks
            .dispatch_cancelled(&self.handle, false, reason);
        outcome
    }
}
