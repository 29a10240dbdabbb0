//! L4 Atomic Layer: Scroll configuration helpers
//!
//! The config types live in scrollable-core so the CLI can load them without
//! the engine; this module adds the derived values the engine needs.

use std::time::Duration;

pub use scrollable_core::{EasingType, ScrollConfig};

/// Derived timing values of a [`ScrollConfig`]
pub trait ScrollConfigExt {
    /// Duration used for "auto" requests
    fn default_duration(&self) -> Duration;

    /// Frame interval for `animation_fps`
    fn animation_tick_duration(&self) -> Duration;

    /// Speed lock distance in px, if enabled
    fn speed_lock(&self) -> Option<f64>;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn default_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn speed_lock(&self) -> Option<f64> {
        (self.lock_speed_below.is_finite() && self.lock_speed_below > 0.0)
            .then_some(self.lock_speed_below)
    }
}
