#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use scrollable_core::{EasingType, Position, ScrollConfig, Size, VirtualViewport};
use scrollable_engine::scroll::{ManualClock, ScrollMessage, ScrollOptions, Scroller};

/// Duration of one scroll animation in these tests
pub const PERIOD: u64 = 400;
pub const FRAME: u64 = 16;

pub type TestScroller = Scroller<VirtualViewport, ManualClock>;

/// A 3000x3000 document in an 800x600 window, linear easing, no speed lock
pub fn window_at(x: f64, y: f64) -> (TestScroller, ManualClock) {
    let config = ScrollConfig {
        duration_ms: PERIOD,
        lock_speed_below: 0.0,
        easing: EasingType::Linear,
        ..Default::default()
    };
    let viewport = VirtualViewport::new(Size::new(800.0, 600.0), Size::new(3000.0, 3000.0))
        .at(Position::new(x, y));
    let clock = ManualClock::new();
    (Scroller::with_clock(viewport, config, clock.clone()), clock)
}

/// Tick at frame rate for `ms` of simulated time
pub fn run_for(scroller: &mut TestScroller, clock: &ManualClock, ms: u64) {
    let mut elapsed = 0;
    while elapsed < ms {
        let step = FRAME.min(ms - elapsed);
        clock.advance_ms(step);
        elapsed += step;
        scroller.tick();
    }
}

/// Let `n` full scroll periods pass, plus a frame of slack
pub fn after_scrolls(scroller: &mut TestScroller, clock: &ManualClock, n: u64) {
    run_for(scroller, clock, n * PERIOD + FRAME);
}

pub fn in_mid_scroll(scroller: &mut TestScroller, clock: &ManualClock) {
    run_for(scroller, clock, PERIOD / 2);
}

pub fn early_in_mid_scroll(scroller: &mut TestScroller, clock: &ManualClock) {
    run_for(scroller, clock, PERIOD / 4);
}

/// One recorded callback invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub event: &'static str,
    /// Message as JSON, for the events that receive one
    pub message: Option<String>,
}

/// Records every callback of one request
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> ScrollOptions {
        self.attach(ScrollOptions::new())
    }

    pub fn attach(&self, options: ScrollOptions) -> ScrollOptions {
        let (start, step, progress) = (self.clone(), self.clone(), self.clone());
        let (done, fail, complete, always) =
            (self.clone(), self.clone(), self.clone(), self.clone());
        options
            .on_start(move |_| start.push("start", None))
            .on_step(move |_, _| step.push("step", None))
            .on_progress(move |_, _, _| progress.push("progress", None))
            .on_done(move |_, _, m| done.push("done", Some(m)))
            .on_fail(move |_, _, m| fail.push("fail", Some(m)))
            .on_complete(move |m| complete.push("complete", Some(m)))
            .on_always(move |_, _, m| always.push("always", Some(m)))
    }

    fn push(&self, event: &'static str, message: Option<&ScrollMessage>) {
        let message = message.map(|m| serde_json::to_string(m).unwrap());
        self.0.borrow_mut().push(Call { event, message });
    }

    pub fn count(&self, event: &str) -> usize {
        self.0.borrow().iter().filter(|c| c.event == event).count()
    }

    pub fn fired(&self, event: &str) -> bool {
        self.count(event) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// JSON message of the first call of `event`
    pub fn message(&self, event: &str) -> Option<String> {
        self.0
            .borrow()
            .iter()
            .find(|c| c.event == event)
            .and_then(|c| c.message.clone())
    }

    /// Event names in firing order, frame events collapsed
    pub fn lifecycle(&self) -> Vec<&'static str> {
        self.0
            .borrow()
            .iter()
            .map(|c| c.event)
            .filter(|e| *e != "step" && *e != "progress")
            .collect()
    }
}

pub fn assert_fuzzy_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1.0,
        "expected {expected} (+/- 1), got {actual}"
    );
}
