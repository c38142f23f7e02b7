//! Data models for wildmap.

mod estimate;
mod mode;
mod polygon;

pub use estimate::{EstimateSet, derive_estimates};
pub use mode::{DrawingMode, DrawingModeController, MapMode, ModeError, OverlayType};
pub use polygon::{DrawnPolygon, PolygonHandle};
