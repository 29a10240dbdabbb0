pub mod config;
pub mod error;
pub mod geometry;
pub mod target;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use geometry::{AxisTarget, PartialPosition, Position, ScrollRange};
pub use target::{ScrollTarget, Size, VirtualViewport};
