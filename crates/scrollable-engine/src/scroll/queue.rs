//! L3 Molecular Layer: Per-target animation queue
//!
//! Sole owner of the running animation and the FIFO of pending requests for
//! one target. Other components read it and ask for transitions.

use std::collections::VecDeque;

use scrollable_core::{Position, ScrollRange};

use super::animation::RunningAnimation;
use super::request::ScrollRequest;

/// Coarse queue state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    Idle,
    Running,
    RunningWithQueued,
}

#[derive(Debug, Default)]
pub struct AnimationQueue {
    current: Option<RunningAnimation>,
    pending: VecDeque<ScrollRequest>,
}

impl AnimationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QueueState {
        match (&self.current, self.pending.is_empty()) {
            (None, _) => QueueState::Idle,
            (Some(_), true) => QueueState::Running,
            (Some(_), false) => QueueState::RunningWithQueued,
        }
    }

    pub fn current(&self) -> Option<&RunningAnimation> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut RunningAnimation> {
        self.current.as_mut()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &ScrollRequest> {
        self.pending.iter()
    }

    /// Target of the running animation
    pub fn running_target(&self) -> Option<Position> {
        self.current.as_ref().map(|a| a.target_position())
    }

    /// Where the last pending request will end up, resolving each entry
    /// against the one before it. `None` when nothing is queued.
    pub fn queued_target(&self, range: ScrollRange) -> Option<Position> {
        let mut base = self.running_target()?;
        if self.pending.is_empty() {
            return None;
        }
        for request in &self.pending {
            base = request.position().resolve(base, range);
        }
        Some(base)
    }

    pub fn set_current(&mut self, animation: RunningAnimation) {
        debug_assert!(self.current.is_none(), "animation already running");
        self.current = Some(animation);
    }

    pub fn take_current(&mut self) -> Option<RunningAnimation> {
        self.current.take()
    }

    pub fn enqueue(&mut self, request: ScrollRequest) {
        self.pending.push_back(request);
    }

    /// Fold `request` into the tail entry. Hands it back when nothing is queued.
    pub fn merge_into_tail(&mut self, request: ScrollRequest) -> Result<(), ScrollRequest> {
        match self.pending.pop_back() {
            Some(tail) => {
                self.pending.push_back(tail.merged_with(request));
                Ok(())
            }
            None => Err(request),
        }
    }

    pub fn pop_next(&mut self) -> Option<ScrollRequest> {
        self.pending.pop_front()
    }

    /// Drop every pending request; their callbacks never fire
    pub fn clear_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}
