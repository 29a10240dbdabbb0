use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use scrollable_core::{AppConfig, AxisTarget, PartialPosition, Position, Size, VirtualViewport};
use scrollable_engine::scroll::{
    Clock, RequestedDuration, ScrollOptions, Scroller, StopOptions, SystemClock, UserInput,
};

/// A timed list of scroll actions played against a virtual viewport
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub viewport: Size,
    pub content: Size,
    #[serde(default)]
    pub start: Position,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse scroll script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Scroll(ScrollStep),
    Stop(StopStep),
    Interrupt(InterruptStep),
}

impl Step {
    /// Offset from the start of playback
    pub fn at_ms(&self) -> u64 {
        match self {
            Step::Scroll(s) => s.at_ms,
            Step::Stop(s) => s.at_ms,
            Step::Interrupt(s) => s.at_ms,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrollStep {
    #[serde(default)]
    pub at_ms: u64,
    pub x: Option<AxisTarget>,
    pub y: Option<AxisTarget>,
    #[serde(default)]
    pub mode: StepMode,
    pub duration: Option<DurationValue>,
    pub easing: Option<String>,
    pub lock_speed_below: Option<f64>,
    /// Label used in the callback log
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    #[default]
    Replace,
    Append,
    Merge,
}

/// Milliseconds or "auto"
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Millis(f64),
    Named(String),
}

impl DurationValue {
    fn resolve(&self) -> Result<RequestedDuration> {
        match self {
            DurationValue::Millis(ms) => Ok(RequestedDuration::Millis(*ms)),
            DurationValue::Named(name) if name == "auto" => Ok(RequestedDuration::Auto),
            DurationValue::Named(other) => Err(anyhow!("invalid duration \"{}\"", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopStep {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(default)]
    pub jump_to_target: bool,
    #[serde(default = "default_true")]
    pub clear_queue: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterruptStep {
    #[serde(default)]
    pub at_ms: u64,
    pub input: InputKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Scroll,
    Click,
}

impl From<InputKind> for UserInput {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Scroll => UserInput::Scroll,
            InputKind::Click => UserInput::Click,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Shared log of callback events, in firing order
pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Feeds script steps into a scroller as their time comes
pub struct Player<C: Clock + Clone> {
    scroller: Scroller<VirtualViewport, C>,
    clock: C,
    started: Instant,
    steps: VecDeque<Step>,
    events: EventLog,
}

impl<C: Clock + Clone> Player<C> {
    pub fn new(script: Script, config: &AppConfig, clock: C) -> Self {
        let viewport = VirtualViewport::new(script.viewport, script.content).at(script.start);
        let mut steps = script.steps;
        steps.sort_by_key(|s| s.at_ms());

        Self {
            scroller: Scroller::with_clock(viewport, config.scroll.clone(), clock.clone()),
            started: clock.now(),
            clock,
            steps: steps.into(),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn scroller(&self) -> &Scroller<VirtualViewport, C> {
        &self.scroller
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty() && !self.scroller.needs_update()
    }

    /// Apply every step that is due, then advance one frame.
    /// Returns whether there is more to play.
    pub fn pump(&mut self) -> Result<bool> {
        let elapsed = self.clock.now().saturating_duration_since(self.started);
        while self
            .steps
            .front()
            .is_some_and(|s| Duration::from_millis(s.at_ms()) <= elapsed)
        {
            if let Some(step) = self.steps.pop_front() {
                self.apply(step)?;
            }
        }
        self.scroller.tick();
        Ok(!self.is_finished())
    }

    fn apply(&mut self, step: Step) -> Result<()> {
        match step {
            Step::Scroll(step) => {
                let label = step
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("scroll@{}ms", step.at_ms));
                let position = PartialPosition::new(step.x, step.y);
                debug!(%label, mode = ?step.mode, "Scroll step");
                let options = self.options_for(&step, &label)?;
                self.scroller
                    .scroll_to(position, options)
                    .with_context(|| format!("Step \"{}\" rejected", label))?;
            }
            Step::Stop(step) => {
                debug!(jump = step.jump_to_target, "Stop step");
                self.scroller.stop(StopOptions {
                    jump_to_target: step.jump_to_target,
                    clear_queue: step.clear_queue,
                });
            }
            Step::Interrupt(step) => {
                if !self.scroller.interrupt(step.input.into()) {
                    debug!(input = ?step.input, "Interrupt ignored");
                }
            }
        }
        Ok(())
    }

    fn options_for(&self, step: &ScrollStep, label: &str) -> Result<ScrollOptions> {
        let mut options = match step.mode {
            StepMode::Replace => ScrollOptions::new(),
            StepMode::Append => ScrollOptions::append(),
            StepMode::Merge => ScrollOptions::merge(),
        };
        if let Some(duration) = &step.duration {
            options = options.duration(duration.resolve()?);
        }
        if let Some(easing) = &step.easing {
            options = options.easing(easing.clone());
        }
        if let Some(lock) = step.lock_speed_below {
            options = options.lock_speed_below(lock);
        }
        Ok(self.log_callbacks(options, label))
    }

    fn log_callbacks(&self, options: ScrollOptions, label: &str) -> ScrollOptions {
        let record = |event: &'static str| {
            let events = self.events.clone();
            let label = label.to_string();
            move |detail: String| {
                info!(step = %label, event, "{}", detail);
                events.borrow_mut().push(format!("{} {}", label, event));
            }
        };
        let start = record("start");
        let done = record("done");
        let fail = record("fail");
        let always = record("always");

        options
            .on_start(move |h| {
                start(format!(
                    "{} -> {} in {:?}",
                    h.start_position, h.target_position, h.duration
                ))
            })
            .on_done(move |_, jumped, _| done(format!("jumped_to_end={}", jumped)))
            .on_fail(move |_, _, message| {
                let reason = message.cancelled.map_or("unknown", |r| r.as_str());
                fail(format!("cancelled={}", reason))
            })
            .on_always(move |h, _, _| always(format!("settled at target {}", h.target_position)))
    }
}

pub async fn run(script_path: &Path, config: &AppConfig) -> Result<()> {
    let script = Script::load(script_path)?;
    println!(
        "Playing {} ({} steps)...\n",
        script_path.display(),
        script.steps.len()
    );

    let mut player = Player::new(script, config, SystemClock);
    let mut frames = tokio::time::interval(player.scroller().tick_interval());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, stopping playback");
                break;
            }
            _ = frames.tick() => {
                if !player.pump()? {
                    break;
                }
            }
        }
    }

    let events = player.events();
    println!("Callbacks ({}):", events.len());
    for event in &events {
        println!("  {}", event);
    }
    println!("\nFinal position: {}", player.scroller().position());

    Ok(())
}
