//! L3 Molecular Layer: Request normalization
//!
//! Every call shape (bare number, per-axis position, position plus options)
//! is turned into one immutable [`ScrollRequest`] at the boundary.

use std::time::Duration;

use scrollable_core::{EasingType, Error, PartialPosition, Position, Result};

use super::callbacks::{AnimationHandle, ScrollCallbacks, ScrollMessage};
use super::config::ScrollConfig;
use super::duration::{DurationPolicy, RequestedDuration};

/// How a request interacts with animations already running or queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Halt whatever runs, drop the queue, start now
    #[default]
    Replace,
    /// Queue behind the running animation
    Append,
    /// Fold into the last queued request
    Merge,
}

/// Caller-facing options of a scroll call
#[derive(Debug, Default)]
pub struct ScrollOptions {
    pub duration: Option<RequestedDuration>,
    pub append: bool,
    pub merge: bool,
    /// Speed lock distance in px for this call
    pub lock_speed_below: Option<f64>,
    /// Easing name, e.g. "swing" or "easeOutCubic"
    pub easing: Option<String>,
    pub callbacks: ScrollCallbacks,
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `ScrollOptions::new().with_append()`
    pub fn append() -> Self {
        Self::new().with_append()
    }

    /// Shorthand for `ScrollOptions::new().with_merge()`
    pub fn merge() -> Self {
        Self::new().with_merge()
    }

    pub fn with_append(mut self) -> Self {
        self.append = true;
        self
    }

    pub fn with_merge(mut self) -> Self {
        self.merge = true;
        self
    }

    pub fn duration(mut self, duration: impl Into<RequestedDuration>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration = Some(RequestedDuration::from(ms));
        self
    }

    pub fn auto_duration(mut self) -> Self {
        self.duration = Some(RequestedDuration::Auto);
        self
    }

    pub fn lock_speed_below(mut self, px: f64) -> Self {
        self.lock_speed_below = Some(px);
        self
    }

    pub fn easing(mut self, name: impl Into<String>) -> Self {
        self.easing = Some(name.into());
        self
    }

    pub fn callbacks(mut self, callbacks: ScrollCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn on_start(mut self, f: impl FnMut(&AnimationHandle) + 'static) -> Self {
        self.callbacks.start = Some(Box::new(f));
        self
    }

    pub fn on_step(mut self, f: impl FnMut(&AnimationHandle, Position) + 'static) -> Self {
        self.callbacks.step = Some(Box::new(f));
        self
    }

    pub fn on_progress(mut self, f: impl FnMut(&AnimationHandle, f64, Duration) + 'static) -> Self {
        self.callbacks.progress = Some(Box::new(f));
        self
    }

    pub fn on_done(
        mut self,
        f: impl FnMut(&AnimationHandle, bool, &ScrollMessage) + 'static,
    ) -> Self {
        self.callbacks.done = Some(Box::new(f));
        self
    }

    pub fn on_fail(
        mut self,
        f: impl FnMut(&AnimationHandle, bool, &ScrollMessage) + 'static,
    ) -> Self {
        self.callbacks.fail = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl FnMut(&ScrollMessage) + 'static) -> Self {
        self.callbacks.complete = Some(Box::new(f));
        self
    }

    pub fn on_always(
        mut self,
        f: impl FnMut(&AnimationHandle, bool, &ScrollMessage) + 'static,
    ) -> Self {
        self.callbacks.always = Some(Box::new(f));
        self
    }

    /// Mode implied by the flags; `merge` wins over `append`
    pub fn mode(&self) -> ScrollMode {
        if self.merge {
            ScrollMode::Merge
        } else if self.append {
            ScrollMode::Append
        } else {
            ScrollMode::Replace
        }
    }
}

/// Canonical scroll request. Immutable once built; merging produces a new one.
#[derive(Debug)]
pub struct ScrollRequest {
    position: PartialPosition,
    mode: ScrollMode,
    duration: RequestedDuration,
    min_speed: Option<f64>,
    easing: EasingType,
    callbacks: ScrollCallbacks,
}

impl ScrollRequest {
    pub fn position(&self) -> &PartialPosition {
        &self.position
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn duration(&self) -> RequestedDuration {
        self.duration
    }

    /// Speed floor in px/ms
    pub fn min_speed(&self) -> Option<f64> {
        self.min_speed
    }

    pub fn easing(&self) -> EasingType {
        self.easing
    }

    pub fn callbacks(&self) -> &ScrollCallbacks {
        &self.callbacks
    }

    /// True when the request names no axis (callback acknowledgment only)
    pub fn is_no_op(&self) -> bool {
        self.position.is_empty()
    }

    /// Fold `newer` into this queued request: axes present in `newer`
    /// overwrite, the rest stay; timing and callbacks come from `newer`.
    pub fn merged_with(self, newer: ScrollRequest) -> ScrollRequest {
        ScrollRequest {
            position: self.position.merged_with(&newer.position),
            ..newer
        }
    }

    pub(crate) fn into_parts(self) -> (PartialPosition, RequestTiming, ScrollCallbacks) {
        let timing = RequestTiming {
            duration: self.duration,
            min_speed: self.min_speed,
            easing: self.easing,
        };
        (self.position, timing, self.callbacks)
    }
}

/// Timing portion of a request, consumed when it starts running
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestTiming {
    pub duration: RequestedDuration,
    pub min_speed: Option<f64>,
    pub easing: EasingType,
}

/// Builds [`ScrollRequest`]s against explicit defaults
#[derive(Debug, Clone)]
pub struct RequestNormalizer {
    policy: DurationPolicy,
    easing: EasingType,
}

impl RequestNormalizer {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            policy: DurationPolicy::new(config),
            easing: config.easing,
        }
    }

    pub fn normalize(
        &self,
        position: impl Into<PartialPosition>,
        options: ScrollOptions,
    ) -> Result<ScrollRequest> {
        let position = position.into();
        let mode = options.mode();

        if !position.is_finite() {
            return Err(Error::InvalidRequest(
                "scroll position must be a finite number".to_string(),
            ));
        }
        if position.is_empty() && options.callbacks.is_empty() {
            return Err(Error::InvalidRequest(
                "neither x nor y is given".to_string(),
            ));
        }

        let duration = options.duration.unwrap_or(RequestedDuration::Auto);
        if let RequestedDuration::Millis(ms) = duration {
            if !ms.is_finite() || ms < 0.0 {
                return Err(Error::InvalidRequest(format!("invalid duration {}ms", ms)));
            }
        }

        if let Some(lock) = options.lock_speed_below {
            if !lock.is_finite() || lock < 0.0 {
                return Err(Error::InvalidRequest(format!(
                    "invalid lockSpeedBelow {}",
                    lock
                )));
            }
        }

        let easing = match options.easing.as_deref() {
            Some(name) => name.parse()?,
            None => self.easing,
        };

        // An explicit 0 turns the lock off for this call
        let min_speed = match options.lock_speed_below {
            Some(lock) if lock == 0.0 => None,
            lock => self.policy.min_speed(duration, lock),
        };

        Ok(ScrollRequest {
            position,
            mode,
            duration,
            min_speed,
            easing,
            callbacks: options.callbacks,
        })
    }
}
