//! L3 Molecular Layer: Scheduling decisions
//!
//! A pure function over resolved targets. It never touches the clock, the
//! queue, or the target, so every rule is testable on its own.

use scrollable_core::Position;

use super::request::ScrollMode;

/// What to do with an incoming request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Nothing running: start immediately
    StartNow,
    /// Cancel the running animation, drop the queue, start immediately
    Replace,
    /// Add at the tail of the queue
    Enqueue,
    /// Fold into the last queued request
    MergeIntoTail,
    /// Redundant: drop without firing any callback
    Discard,
}

/// Resolved targets the decision is made against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Targets {
    /// Destination of the incoming request, resolved against `eventual()`
    pub requested: Position,
    /// Destination of the running animation
    pub running: Option<Position>,
    /// Destination of the last queued request
    pub queued: Option<Position>,
}

impl Targets {
    /// Where the target will be once everything ahead has run
    pub fn eventual(&self) -> Option<Position> {
        self.queued.or(self.running)
    }
}

pub fn decide(mode: ScrollMode, targets: &Targets, tolerance: f64) -> Decision {
    let Some(running) = targets.running else {
        return Decision::StartNow;
    };

    match mode {
        ScrollMode::Replace => Decision::Replace,
        ScrollMode::Merge if targets.queued.is_some() => Decision::MergeIntoTail,
        ScrollMode::Append | ScrollMode::Merge => {
            let eventual = targets.queued.unwrap_or(running);
            if targets.requested.fuzzy_eq(&eventual, tolerance) {
                Decision::Discard
            } else {
                Decision::Enqueue
            }
        }
    }
}
