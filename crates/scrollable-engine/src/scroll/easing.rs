//! L4 Atomic Layer: Easing curves
//!
//! Each curve maps linear progress in [0, 1] onto eased progress in [0, 1],
//! with `f(0) = 0` and `f(1) = 1`.

use std::f64::consts::PI;

pub use scrollable_core::EasingType;

/// Curve evaluation for [`EasingType`]
pub trait EasingTypeExt {
    /// Eased progress for linear progress `t`; input outside [0, 1] is clamped
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        curve(*self)(t.clamp(0.0, 1.0))
    }
}

fn curve(easing: EasingType) -> fn(f64) -> f64 {
    match easing {
        EasingType::None => hold,
        EasingType::Linear => linear,
        EasingType::Swing => swing,
        EasingType::Cubic => ease_out_cubic,
        EasingType::Quintic => ease_out_quint,
        EasingType::EaseOut => ease_out_expo,
    }
}

/// Stays at the start until the very end
fn hold(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        0.0
    }
}

fn linear(t: f64) -> f64 {
    t
}

/// Half cosine, slow at both ends
fn swing(t: f64) -> f64 {
    0.5 - (PI * t).cos() / 2.0
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_out_quint(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

fn ease_out_expo(t: f64) -> f64 {
    // 2^-10 is not quite zero
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}
