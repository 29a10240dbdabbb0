//! L4 Atomic Layer: Speed-aware animation duration
//!
//! A fixed duration applied to a very short distance produces slow motion that
//! looks stuck. The speed lock shortens such moves so the scroll speed never
//! drops below a floor.

use std::time::Duration;

use super::config::{ScrollConfig, ScrollConfigExt};

/// Duration as asked for by the caller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RequestedDuration {
    /// Explicit duration in milliseconds
    Millis(f64),
    /// Use the configured default
    #[default]
    Auto,
}

impl From<u64> for RequestedDuration {
    fn from(ms: u64) -> Self {
        RequestedDuration::Millis(ms as f64)
    }
}

impl From<Duration> for RequestedDuration {
    fn from(duration: Duration) -> Self {
        RequestedDuration::Millis(duration.as_secs_f64() * 1000.0)
    }
}

/// Effective duration in ms for a move of `distance_px`.
///
/// Zero distance is always zero duration. With a `min_speed` floor (px/ms),
/// a move slower than the floor is shortened to `distance_px / min_speed`.
pub fn effective_duration_ms(requested_ms: f64, distance_px: f64, min_speed: Option<f64>) -> f64 {
    if distance_px <= 0.0 || requested_ms <= 0.0 {
        return 0.0;
    }
    match min_speed {
        Some(floor) if floor > 0.0 && distance_px / requested_ms < floor => distance_px / floor,
        _ => requested_ms,
    }
}

/// Speed floor (px/ms) of a full-duration move over `lock_px`
pub fn min_speed_for(lock_px: f64, duration_ms: f64) -> Option<f64> {
    (lock_px > 0.0 && duration_ms > 0.0).then(|| lock_px / duration_ms)
}

/// Resolves requested durations with the configured default
#[derive(Debug, Clone, Copy)]
pub struct DurationPolicy {
    default: Duration,
    speed_lock: Option<f64>,
}

impl DurationPolicy {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            default: config.default_duration(),
            speed_lock: config.speed_lock(),
        }
    }

    /// Requested duration in ms, "auto" resolved
    pub fn requested_ms(&self, requested: RequestedDuration) -> f64 {
        match requested {
            RequestedDuration::Millis(ms) => ms,
            RequestedDuration::Auto => self.default.as_secs_f64() * 1000.0,
        }
    }

    /// Speed floor for a request, from its own lock distance or the configured one
    pub fn min_speed(&self, requested: RequestedDuration, lock_px: Option<f64>) -> Option<f64> {
        let lock = lock_px.or(self.speed_lock)?;
        min_speed_for(lock, self.requested_ms(requested))
    }

    /// Effective duration of a move, saturating at [`Duration::MAX`]
    pub fn effective_duration(
        &self,
        requested: RequestedDuration,
        distance_px: f64,
        min_speed: Option<f64>,
    ) -> Duration {
        let ms = effective_duration_ms(self.requested_ms(requested), distance_px, min_speed);
        Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
    }
}
