//! Map view modes and the polygon drawing tool state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level mode of the map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    /// Species markers on the base map
    #[default]
    Default,
    /// Habitat-loss choropleth overlay
    Overlay,
    /// Polygon drawing and area estimation
    Draw,
    /// Park markers
    Park,
}

impl MapMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            MapMode::Default => "Default",
            MapMode::Overlay => "Overlay",
            MapMode::Draw => "Draw",
            MapMode::Park => "Park",
        }
    }

    /// Get all map modes.
    pub fn all() -> &'static [MapMode] {
        &[MapMode::Default, MapMode::Overlay, MapMode::Draw, MapMode::Park]
    }
}

/// Overlay types a drawing toolbar can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayType {
    Polygon,
    Rectangle,
    Circle,
    Polyline,
    Marker,
}

impl OverlayType {
    /// Get the display name for this overlay type.
    pub fn name(&self) -> &'static str {
        match self {
            OverlayType::Polygon => "Polygon",
            OverlayType::Rectangle => "Rectangle",
            OverlayType::Circle => "Circle",
            OverlayType::Polyline => "Polyline",
            OverlayType::Marker => "Marker",
        }
    }
}

/// State of the drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Tool not armed; drawing events are dropped.
    #[default]
    Inactive,
    /// Polygon tool armed.
    DrawingPolygon,
}

/// Errors from drawing mode requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Only polygons can be drawn
    #[error("Overlay type '{}' is not supported, only polygons can be drawn", .0.name())]
    UnsupportedOverlay(OverlayType),
}

/// Owns the map mode and whether the polygon tool is armed.
///
/// Entering [`MapMode::Draw`] arms the tool, leaving it disarms. The tool stays armed
/// after a ring is completed. Polygon cleanup is not this controller's job.
#[derive(Debug, Clone, Default)]
pub struct DrawingModeController {
    map_mode: MapMode,
    mode: DrawingMode,
}

impl DrawingModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_mode(&self) -> MapMode {
        self.map_mode
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Whether drawing-tool events should be delivered.
    pub fn is_active(&self) -> bool {
        self.mode == DrawingMode::DrawingPolygon
    }

    /// The only overlay type this controller draws.
    pub fn overlay_type(&self) -> OverlayType {
        OverlayType::Polygon
    }

    /// Switch the map view mode. Entering `Draw` activates the tool, any other mode
    /// deactivates it.
    pub fn set_map_mode(&mut self, map_mode: MapMode, surface_mounted: bool) {
        if self.map_mode != map_mode {
            log::debug!("🗺️ Map mode: {:?} -> {:?}", self.map_mode, map_mode);
        }
        self.map_mode = map_mode;

        if map_mode == MapMode::Draw {
            self.activate(surface_mounted);
        } else {
            self.deactivate();
        }
    }

    /// Arm the polygon tool. A no-op while the host surface is not mounted.
    /// Returns whether the tool is armed afterwards.
    pub fn activate(&mut self, surface_mounted: bool) -> bool {
        if !surface_mounted {
            log::warn!("Map surface not mounted, drawing tool not armed");
            return self.is_active();
        }

        if self.mode == DrawingMode::Inactive {
            self.mode = DrawingMode::DrawingPolygon;
            log::debug!("✏️ Polygon tool armed");
        }
        true
    }

    /// Disarm the tool. Drawn polygons are left alone.
    pub fn deactivate(&mut self) {
        if self.mode != DrawingMode::Inactive {
            self.mode = DrawingMode::Inactive;
            log::debug!("✏️ Polygon tool disarmed");
        }
    }

    /// A ring was completed. The tool stays armed for the next polygon.
    pub fn on_ring_completed(&mut self) {
        if !self.is_active() {
            log::debug!("Ring completed while the polygon tool is disarmed");
        }
    }

    /// Request an overlay type from the toolbar. Only polygons are accepted.
    pub fn select_overlay(&mut self, overlay: OverlayType) -> Result<(), ModeError> {
        match overlay {
            OverlayType::Polygon => Ok(()),
            other => {
                log::debug!("Rejected overlay type {}", other.name());
                Err(ModeError::UnsupportedOverlay(other))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = DrawingModeController::new();
        assert_eq!(controller.mode(), DrawingMode::Inactive);
        assert_eq!(controller.map_mode(), MapMode::Default);
        assert!(!controller.is_active());
    }

    #[test]
    fn test_activate_and_stay_armed() {
        let mut controller = DrawingModeController::new();
        assert!(controller.activate(true));
        assert_eq!(controller.mode(), DrawingMode::DrawingPolygon);

        controller.on_ring_completed();
        assert_eq!(controller.mode(), DrawingMode::DrawingPolygon);

        // Activating again is harmless
        assert!(controller.activate(true));
        assert!(controller.is_active());
    }

    #[test]
    fn test_unmounted_surface_is_noop() {
        let mut controller = DrawingModeController::new();
        assert!(!controller.activate(false));
        assert_eq!(controller.mode(), DrawingMode::Inactive);

        controller.set_map_mode(MapMode::Draw, false);
        assert_eq!(controller.map_mode(), MapMode::Draw);
        assert!(!controller.is_active());
    }

    #[test]
    fn test_map_mode_transitions() {
        let mut controller = DrawingModeController::new();

        controller.set_map_mode(MapMode::Draw, true);
        assert!(controller.is_active());

        for mode in [MapMode::Default, MapMode::Overlay, MapMode::Park] {
            controller.set_map_mode(MapMode::Draw, true);
            controller.set_map_mode(mode, true);
            assert!(!controller.is_active(), "{} should disarm", mode.name());
        }
    }

    #[test]
    fn test_only_polygons_selectable() {
        let mut controller = DrawingModeController::new();
        assert_eq!(controller.select_overlay(OverlayType::Polygon), Ok(()));
        assert_eq!(
            controller.select_overlay(OverlayType::Circle),
            Err(ModeError::UnsupportedOverlay(OverlayType::Circle))
        );
        assert_eq!(controller.overlay_type(), OverlayType::Polygon);

        let message = ModeError::UnsupportedOverlay(OverlayType::Marker).to_string();
        assert!(message.contains("Marker"));
    }
}
