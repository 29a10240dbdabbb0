use std::time::Duration;

use anyhow::{bail, Result};

use scrollable_core::AppConfig;
use scrollable_engine::scroll::{DurationPolicy, RequestedDuration};

/// Effective duration of a move of `distance` px
pub fn effective(
    config: &AppConfig,
    distance: f64,
    duration_ms: Option<u64>,
    lock_speed_below: Option<f64>,
) -> Result<Duration> {
    if !distance.is_finite() || distance < 0.0 {
        bail!("distance must be a non-negative number, got {}", distance);
    }
    let policy = DurationPolicy::new(&config.scroll);
    let requested = duration_ms.map(RequestedDuration::from).unwrap_or_default();
    let min_speed = match lock_speed_below {
        Some(lock) if lock == 0.0 => None,
        lock => policy.min_speed(requested, lock),
    };
    Ok(policy.effective_duration(requested, distance, min_speed))
}

pub fn run(
    config: &AppConfig,
    distance: f64,
    duration_ms: Option<u64>,
    lock_speed_below: Option<f64>,
) -> Result<()> {
    let effective = effective(config, distance, duration_ms, lock_speed_below)?;
    let requested = duration_ms.unwrap_or(config.scroll.duration_ms);

    println!("Distance:  {}px", distance);
    println!("Requested: {}ms", requested);
    println!("Effective: {:.1}ms", effective.as_secs_f64() * 1000.0);
    if effective < Duration::from_millis(requested) {
        println!("\nSpeed lock applied: short moves run faster than the requested duration.");
    }
    Ok(())
}
