//! L3 Molecular Layer: Lifecycle callbacks and their dispatch
//!
//! Seven optional slots fire in a fixed order:
//! `start → (step, progress)* → (done → complete → always) | (fail → always)`.
//! Each invocation is isolated, so a panicking callback never stops its
//! siblings or the queue behind it.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use scrollable_core::Position;

/// Identifier of one animation on one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What callbacks receive as the animation argument
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationHandle {
    pub id: AnimationId,
    pub start_position: Position,
    pub target_position: Position,
    pub duration: Duration,
}

/// Why an animation was halted before completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelReason {
    /// A replace-mode request took over
    Replace,
    /// Explicit stop
    Stop,
    /// The user scrolled
    Scroll,
    /// The user clicked or touched
    Click,
}

impl CancelReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancelReason::Replace => "replace",
            CancelReason::Stop => "stop",
            CancelReason::Scroll => "scroll",
            CancelReason::Click => "click",
        }
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message object passed to `done`, `fail`, `complete` and `always`.
/// Empty (`{}`) on normal completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<CancelReason>,
}

impl ScrollMessage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cancelled(reason: CancelReason) -> Self {
        Self {
            cancelled: Some(reason),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cancelled.is_none()
    }
}

pub type StartCallback = Box<dyn FnMut(&AnimationHandle)>;
pub type StepCallback = Box<dyn FnMut(&AnimationHandle, Position)>;
pub type ProgressCallback = Box<dyn FnMut(&AnimationHandle, f64, Duration)>;
pub type SettleCallback = Box<dyn FnMut(&AnimationHandle, bool, &ScrollMessage)>;
pub type CompleteCallback = Box<dyn FnMut(&ScrollMessage)>;

/// Optional lifecycle slots of one request
#[derive(Default)]
pub struct ScrollCallbacks {
    pub start: Option<StartCallback>,
    pub step: Option<StepCallback>,
    pub progress: Option<ProgressCallback>,
    pub done: Option<SettleCallback>,
    pub fail: Option<SettleCallback>,
    pub complete: Option<CompleteCallback>,
    pub always: Option<SettleCallback>,
}

impl fmt::Debug for ScrollCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollCallbacks")
            .field("start", &self.start.is_some())
            .field("step", &self.step.is_some())
            .field("progress", &self.progress.is_some())
            .field("done", &self.done.is_some())
            .field("fail", &self.fail.is_some())
            .field("complete", &self.complete.is_some())
            .field("always", &self.always.is_some())
            .finish()
    }
}

impl ScrollCallbacks {
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.step.is_none()
            && self.progress.is_none()
            && self.done.is_none()
            && self.fail.is_none()
            && self.complete.is_none()
            && self.always.is_none()
    }

    pub fn dispatch_start(&mut self, handle: &AnimationHandle) {
        if let Some(cb) = self.start.as_mut() {
            isolated("start", handle.id, || cb(handle));
        }
    }

    /// One frame: `step` with the interpolated position, then `progress`
    pub fn dispatch_frame(
        &mut self,
        handle: &AnimationHandle,
        position: Position,
        fraction: f64,
        remaining: Duration,
    ) {
        if let Some(cb) = self.step.as_mut() {
            isolated("step", handle.id, || cb(handle, position));
        }
        if let Some(cb) = self.progress.as_mut() {
            isolated("progress", handle.id, || cb(handle, fraction, remaining));
        }
    }

    /// `done → complete → always`, each with an empty message
    pub fn dispatch_completed(&mut self, handle: &AnimationHandle, jumped_to_end: bool) {
        let message = ScrollMessage::empty();
        if let Some(cb) = self.done.as_mut() {
            isolated("done", handle.id, || cb(handle, jumped_to_end, &message));
        }
        if let Some(cb) = self.complete.as_mut() {
            isolated("complete", handle.id, || cb(&message));
        }
        if let Some(cb) = self.always.as_mut() {
            isolated("always", handle.id, || cb(handle, jumped_to_end, &message));
        }
    }

    /// `fail → always`, both with `{cancelled: reason}`
    pub fn dispatch_cancelled(
        &mut self,
        handle: &AnimationHandle,
        jumped_to_end: bool,
        reason: CancelReason,
    ) {
        let message = ScrollMessage::cancelled(reason);
        if let Some(cb) = self.fail.as_mut() {
            isolated("fail", handle.id, || cb(handle, jumped_to_end, &message));
        }
        if let Some(cb) = self.always.as_mut() {
            isolated("always", handle.id, || cb(handle, jumped_to_end, &message));
        }
    }
}

fn isolated<F: FnOnce()>(event: &'static str, id: AnimationId, f: F) {
    if panic::catch_unwind(AssertUnwindSafe(f)).is_err() {
        warn!(animation = %id, event, "Scroll callback panicked, continuing dispatch");
    }
}
