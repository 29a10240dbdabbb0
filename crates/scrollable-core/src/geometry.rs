//! Scroll coordinates: absolute positions, per-axis targets, and ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Absolute scroll position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Per-axis comparison within `tolerance` px
    pub fn fuzzy_eq(&self, other: &Position, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Longest single-axis distance to `other`
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Maximum scroll offsets of a target
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollRange {
    pub horizontal: f64,
    pub vertical: f64,
}

impl ScrollRange {
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(0.0, self.horizontal.max(0.0)),
            y: position.y.clamp(0.0, self.vertical.max(0.0)),
        }
    }
}

/// Destination for a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisTarget {
    /// Absolute offset in px
    To(f64),
    /// Offset relative to where the axis will be when the move starts
    By(f64),
}

impl AxisTarget {
    pub fn resolve(&self, base: f64) -> f64 {
        match *self {
            AxisTarget::To(px) => px,
            AxisTarget::By(delta) => base + delta,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            AxisTarget::To(v) | AxisTarget::By(v) => v.is_finite(),
        }
    }
}

impl From<f64> for AxisTarget {
    fn from(px: f64) -> Self {
        AxisTarget::To(px)
    }
}

impl fmt::Display for AxisTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AxisTarget::To(px) => write!(f, "{}", px),
            AxisTarget::By(delta) if delta < 0.0 => write!(f, "-={}", -delta),
            AxisTarget::By(delta) => write!(f, "+={}", delta),
        }
    }
}

impl FromStr for AxisTarget {
    type Err = crate::Error;

    /// Accepts "120", "+=40" and "-=40"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || crate::Error::InvalidRequest(format!("invalid axis target \"{}\"", s));

        let (relative_sign, number) = if let Some(rest) = s.strip_prefix("+=") {
            (Some(1.0), rest)
        } else if let Some(rest) = s.strip_prefix("-=") {
            (Some(-1.0), rest)
        } else {
            (None, s)
        };

        let value: f64 = number.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(match relative_sign {
            Some(sign) => AxisTarget::By(sign * value),
            None => AxisTarget::To(value),
        })
    }
}

impl Serialize for AxisTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            AxisTarget::To(px) => serializer.serialize_f64(px),
            AxisTarget::By(_) => serializer.collect_str(self),
        }
    }
}

// Accept either a number (absolute) or a string ("+=40", "-=40", "120")
impl<'de> Deserialize<'de> for AxisTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct AxisTargetVisitor;

        impl<'de> Visitor<'de> for AxisTargetVisitor {
            type Value = AxisTarget;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a relative offset such as \"+=40\"")
            }

            fn visit_f64<E>(self, value: f64) -> Result<AxisTarget, E>
            where
                E: de::Error,
            {
                Ok(AxisTarget::To(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<AxisTarget, E>
            where
                E: de::Error,
            {
                Ok(AxisTarget::To(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<AxisTarget, E>
            where
                E: de::Error,
            {
                Ok(AxisTarget::To(value as f64))
            }

            fn visit_str<E>(self, value: &str) -> Result<AxisTarget, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AxisTargetVisitor)
    }
}

/// Requested position where omitted axes stay where they are
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisTarget>,
}

impl PartialPosition {
    pub fn new(x: Option<AxisTarget>, y: Option<AxisTarget>) -> Self {
        Self { x, y }
    }

    pub fn x(px: f64) -> Self {
        Self::new(Some(AxisTarget::To(px)), None)
    }

    pub fn y(px: f64) -> Self {
        Self::new(None, Some(AxisTarget::To(px)))
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(Some(AxisTarget::To(x)), Some(AxisTarget::To(y)))
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    pub fn is_finite(&self) -> bool {
        self.x.map_or(true, |t| t.is_finite()) && self.y.map_or(true, |t| t.is_finite())
    }

    /// Resolve against the position each axis will already have reached,
    /// then clamp into the scrollable range
    pub fn resolve(&self, base: Position, range: ScrollRange) -> Position {
        let resolved = Position {
            x: self.x.map_or(base.x, |t| t.resolve(base.x)),
            y: self.y.map_or(base.y, |t| t.resolve(base.y)),
        };
        range.clamp(resolved)
    }

    /// Per-axis overwrite: axes present in `newer` win
    pub fn merged_with(&self, newer: &PartialPosition) -> PartialPosition {
        PartialPosition {
            x: newer.x.or(self.x),
            y: newer.y.or(self.y),
        }
    }
}

/// A bare number scrolls vertically
impl From<f64> for PartialPosition {
    fn from(px: f64) -> Self {
        PartialPosition::y(px)
    }
}

impl From<i32> for PartialPosition {
    fn from(px: i32) -> Self {
        PartialPosition::y(px as f64)
    }
}

impl From<Position> for PartialPosition {
    fn from(position: Position) -> Self {
        PartialPosition::xy(position.x, position.y)
    }
}

impl From<(f64, f64)> for PartialPosition {
    fn from((x, y): (f64, f64)) -> Self {
        PartialPosition::xy(x, y)
    }
}
