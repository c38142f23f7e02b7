//! wildmap - habitat area estimation for a wildlife map
//!
//! The polygon drawing workflow behind the map's area analysis: the user draws and edits
//! polygons, each mutation recomputes the geodesic area of the edited polygon and reports
//! it, and the area panel turns the reported area into habitat estimates.

mod channel;
pub mod config;
mod constants;
mod handlers;
mod lifecycle;
mod message;
mod model;
mod panel;
pub mod replay;
mod state;

#[cfg(test)]
mod tests;

pub use channel::{AreaChannel, AreaSink, CLEARED_AREA};
pub use handlers::handle_draw;
pub use lifecycle::PolygonLifecycle;
pub use message::DrawMessage;
pub use model::{
    DrawingMode, DrawingModeController, DrawnPolygon, EstimateSet, MapMode, ModeError,
    OverlayType, PolygonHandle, derive_estimates,
};
pub use panel::{AreaPanel, EstimateRow, EstimateSection, format_grouped};
pub use state::{DrawingSession, DrawingView};
pub use wildmap_geo::{
    AreaCalculator, AreaModel, EllipsoidalArea, LatLng, PlanarArea, Ring, RingEdit,
    SphericalArea,
};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
