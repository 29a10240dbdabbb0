//! Queued scroll animations for scrollable targets
//!
//! Scroll requests either replace the running animation, queue behind it, or
//! merge into the last queued request. Durations shrink for short moves so
//! the scroll speed never drops below a floor, and seven lifecycle callbacks
//! report how each animation went.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (swing, cubic, quintic, exponential)
//! - `timing` - Frame clock and time calculation utilities
//! - `config` - Configuration types and defaults (re-exported from scrollable-core)
//! - `duration` - Speed-aware effective duration
//!
//! ## L3 Molecular Layer
//! - `request` - Request normalization
//! - `callbacks` - Lifecycle callbacks and isolated dispatch
//! - `queue` - Per-target running animation plus pending FIFO
//! - `scheduler` - Replace / append / merge decisions
//! - `animation` - Animation runner
//!
//! ## L2 Organism Layer
//! - `scroller` - Per-target scheduler combining the layers above
//!
//! # Usage
//!
//! ```ignore
//! use scrollable_core::{ScrollConfig, Size, VirtualViewport};
//! use scrollable_engine::scroll::{ScrollOptions, Scroller};
//!
//! let viewport = VirtualViewport::new(Size::new(800.0, 600.0), Size::new(800.0, 5000.0));
//! let mut scroller = Scroller::new(viewport, ScrollConfig::default());
//!
//! // Scroll down to 1200px, then queue a move back to the top
//! scroller
//!     .scroll_to(1200.0, ScrollOptions::new().on_done(|_, _, _| println!("there")))?
//!     .scroll_to(0.0, ScrollOptions::append())?;
//!
//! // In main loop, tick each frame while there is work
//! while scroller.tick() {
//!     std::thread::sleep(scroller.tick_interval());
//! }
//! ```

// L4 Atomic Layer
pub mod config;
pub mod duration;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;
pub mod callbacks;
pub mod queue;
pub mod request;
pub mod scheduler;

// L2 Organism Layer
pub mod scroller;

// Re-exports for convenient access
pub use animation::{AnimationOutcome, AnimationPhase, RunningAnimation};
pub use callbacks::{AnimationHandle, AnimationId, CancelReason, ScrollCallbacks, ScrollMessage};
pub use config::{ScrollConfig, ScrollConfigExt};
pub use duration::{DurationPolicy, RequestedDuration};
pub use easing::{EasingType, EasingTypeExt};
pub use queue::QueueState;
pub use request::{RequestNormalizer, ScrollMode, ScrollOptions, ScrollRequest};
pub use scheduler::{decide, Decision, Targets};
pub use scroller::{Scroller, StopOptions, UserInput};
pub use timing::{Clock, ManualClock, SystemClock};
