//! L2 Organism Layer: Per-target scroll scheduler
//!
//! [`Scroller`] owns one scroll target and its animation queue. Requests go
//! through the normalizer, the scheduler decides, and the runner is driven by
//! the host calling [`Scroller::tick`] once per frame.

use std::time::Duration;

use tracing::debug;

use scrollable_core::{PartialPosition, Position, Result, ScrollRange, ScrollTarget};

use super::animation::{AnimationOutcome, RunningAnimation};
use super::callbacks::{AnimationHandle, AnimationId, CancelReason};
use super::config::{ScrollConfig, ScrollConfigExt};
use super::duration::DurationPolicy;
use super::queue::{AnimationQueue, QueueState};
use super::request::{RequestNormalizer, ScrollOptions, ScrollRequest};
use super::scheduler::{decide, Decision, Targets};
use super::timing::{Clock, SystemClock};

/// User interaction that interrupts a running animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInput {
    Scroll,
    Click,
}

impl From<UserInput> for CancelReason {
    fn from(input: UserInput) -> Self {
        match input {
            UserInput::Scroll => CancelReason::Scroll,
            UserInput::Click => CancelReason::Click,
        }
    }
}

/// Options for [`Scroller::stop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOptions {
    /// Write the target position and complete instead of failing
    pub jump_to_target: bool,
    /// Drop pending requests; otherwise the next one starts
    pub clear_queue: bool,
}

impl Default for StopOptions {
    fn default() -> Self {
        Self {
            jump_to_target: false,
            clear_queue: true,
        }
    }
}

/// Scroll animation scheduler for one target
pub struct Scroller<T: ScrollTarget, C: Clock = SystemClock> {
    target: T,
    clock: C,
    config: ScrollConfig,
    normalizer: RequestNormalizer,
    policy: DurationPolicy,
    queue: AnimationQueue,
    last_id: u64,
}

impl<T: ScrollTarget> Scroller<T> {
    /// Create a scroller driven by the wall clock
    pub fn new(target: T, config: ScrollConfig) -> Self {
        Self::with_clock(target, config, SystemClock)
    }
}

impl<T: ScrollTarget, C: Clock> Scroller<T, C> {
    pub fn with_clock(target: T, config: ScrollConfig, clock: C) -> Self {
        Self {
            target,
            clock,
            normalizer: RequestNormalizer::new(&config),
            policy: DurationPolicy::new(&config),
            config,
            queue: AnimationQueue::new(),
            last_id: 0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Direct access to the target. Writes made here are not animations;
    /// a running animation keeps writing on the next tick.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn position(&self) -> Position {
        self.target.position()
    }

    pub fn scroll_range(&self) -> ScrollRange {
        self.target.scroll_range()
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.queue.current().is_some()
    }

    /// Check if there's pending work. Use this to determine if we need
    /// a high frame rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.is_animating()
    }

    /// Frame interval hosts should tick at while `needs_update()`
    pub fn tick_interval(&self) -> Duration {
        self.config.animation_tick_duration()
    }

    pub fn queue_state(&self) -> QueueState {
        self.queue.state()
    }

    pub fn pending_len(&self) -> usize {
        self.queue.pending_len()
    }

    pub fn current_handle(&self) -> Option<&AnimationHandle> {
        self.queue.current().map(|a| a.handle())
    }

    /// Where the target ends up once the running and queued animations are done
    pub fn eventual_position(&self) -> Position {
        let range = self.target.scroll_range();
        self.queue
            .queued_target(range)
            .or_else(|| self.queue.running_target())
            .unwrap_or_else(|| self.target.position())
    }

    /// Animate to `position`. Omitted axes keep their position.
    ///
    /// Returns `self` for chaining. Fails only for malformed input; redundant
    /// requests are dropped silently and cancellations are reported through
    /// callbacks.
    pub fn scroll_to(
        &mut self,
        position: impl Into<PartialPosition>,
        options: ScrollOptions,
    ) -> Result<&mut Self> {
        let request = self.normalizer.normalize(position, options)?;
        self.schedule(request);
        Ok(self)
    }

    fn schedule(&mut self, request: ScrollRequest) {
        let range = self.target.scroll_range();
        let running = self.queue.running_target();
        let queued = self.queue.queued_target(range);
        let base = queued.or(running).unwrap_or_else(|| self.target.position());
        let targets = Targets {
            requested: request.position().resolve(base, range),
            running,
            queued,
        };

        let decision = decide(
            request.mode(),
            &targets,
            self.config.position_tolerance_px,
        );
        debug!(
            ?decision,
            mode = ?request.mode(),
            requested = %targets.requested,
            pending = self.queue.pending_len(),
            "Scroll request scheduled"
        );

        match decision {
            Decision::StartNow => self.start(request),
            Decision::Replace => {
                let dropped = self.queue.clear_pending();
                if dropped > 0 {
                    debug!(dropped, "Pending scroll requests discarded");
                }
                if let Some(mut animation) = self.queue.take_current() {
                    animation.cancel(CancelReason::Replace);
                }
                self.start(request);
            }
            Decision::Enqueue => self.queue.enqueue(request),
            Decision::MergeIntoTail => {
                if let Err(request) = self.queue.merge_into_tail(request) {
                    self.queue.enqueue(request);
                }
            }
            Decision::Discard => {}
        }
    }

    /// Start `request` now. Zero-duration animations complete on the spot
    /// and hand over to the next pending request.
    fn start(&mut self, request: ScrollRequest) {
        let mut next = Some(request);
        while let Some(request) = next.take() {
            let mut animation = self.launch(request);
            animation.begin();

            if animation.effective_duration().is_zero() {
                let target = animation.target_position();
                if self.target.position() != target {
                    self.target.set_position(target);
                }
                animation.finish(false);
                next = self.queue.pop_next();
            } else {
                self.queue.set_current(animation);
            }
        }
    }

    fn launch(&mut self, request: ScrollRequest) -> RunningAnimation {
        let now = self.clock.now();
        let from = self.target.position();
        let range = self.target.scroll_range();
        let (position, timing, callbacks) = request.into_parts();
        let to = position.resolve(from, range);
        let duration = self
            .policy
            .effective_duration(timing.duration, from.distance_to(&to), timing.min_speed);

        self.last_id += 1;
        RunningAnimation::new(
            AnimationId(self.last_id),
            from,
            to,
            now,
            duration,
            timing.easing,
            callbacks,
        )
    }

    /// Advance the running animation by one frame.
    ///
    /// When it completes, the next pending request starts from wherever the
    /// target is at that moment. Returns whether more frames are needed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let outcome = match self.queue.current_mut() {
            Some(animation) => animation.advance(&mut self.target, now),
            None => return false,
        };

        if outcome.is_some() {
            self.queue.take_current();
            if let Some(next) = self.queue.pop_next() {
                self.start(next);
            }
        }
        self.needs_update()
    }

    /// Halt the running animation explicitly.
    pub fn stop(&mut self, options: StopOptions) -> Option<AnimationOutcome> {
        if options.clear_queue {
            self.queue.clear_pending();
        }
        let outcome = self.queue.take_current().map(|mut animation| {
            if options.jump_to_target {
                animation.jump_to_end(&mut self.target)
            } else {
                animation.cancel(CancelReason::Stop)
            }
        });
        if !self.is_animating() {
            if let Some(next) = self.queue.pop_next() {
                self.start(next);
            }
        }
        outcome
    }

    /// Report user interaction. Cancels the running animation and the queue
    /// when `cancel_on_user_input` is set. Returns whether anything was cancelled.
    pub fn interrupt(&mut self, input: UserInput) -> bool {
        if !self.config.cancel_on_user_input {
            return false;
        }
        let Some(mut animation) = self.queue.take_current() else {
            return false;
        };
        self.queue.clear_pending();
        animation.cancel(input.into());
        true
    }
}
