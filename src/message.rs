//! Drawing events delivered by the host map.
//!
//! Every interaction the host reports is a message, handled one at a time by
//! [`handle_draw`](crate::handlers::handle_draw).

use serde::{Deserialize, Serialize};
use wildmap_geo::{Ring, RingEdit};

use crate::model::{MapMode, OverlayType, PolygonHandle};

/// Messages that can be sent to update a drawing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawMessage {
    /// The host map surface was mounted or torn down
    SurfaceMounted { mounted: bool },
    /// The map view switched mode
    SetMapMode { mode: MapMode },
    /// Arm the polygon tool
    ActivateTool,
    /// Disarm the polygon tool
    DeactivateTool,
    /// An overlay type was picked in the drawing toolbar
    SelectOverlay { overlay: OverlayType },
    /// The user finished drawing a ring
    PolygonCompleted { ring: Ring },
    /// A vertex was inserted, `ring` is the ring afterwards
    VertexInserted { handle: PolygonHandle, ring: Ring },
    /// A vertex was moved, `ring` is the ring afterwards
    VertexUpdated { handle: PolygonHandle, ring: Ring },
    /// A vertex was removed, `ring` is the ring afterwards
    VertexRemoved { handle: PolygonHandle, ring: Ring },
    /// A single vertex edit
    VertexEdited { handle: PolygonHandle, edit: RingEdit },
    /// Secondary click on a polygon, deletes it
    RightClick { handle: PolygonHandle },
    /// Remove every polygon
    ClearAll,
    /// The area panel was dismissed
    ClosePanel,
}

impl DrawMessage {
    /// Whether this message comes from the drawing tool and must be dropped while
    /// the tool is disarmed.
    pub fn is_tool_event(&self) -> bool {
        matches!(
            self,
            DrawMessage::PolygonCompleted { .. }
                | DrawMessage::VertexInserted { .. }
                | DrawMessage::VertexUpdated { .. }
                | DrawMessage::VertexRemoved { .. }
                | DrawMessage::VertexEdited { .. }
                | DrawMessage::RightClick { .. }
        )
    }

    /// Short name of the message kind for logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawMessage::SurfaceMounted { .. } => "surface_mounted",
            DrawMessage::SetMapMode { .. } => "set_map_mode",
            DrawMessage::ActivateTool => "activate_tool",
            DrawMessage::DeactivateTool => "deactivate_tool",
            DrawMessage::SelectOverlay { .. } => "select_overlay",
            DrawMessage::PolygonCompleted { .. } => "polygon_completed",
            DrawMessage::VertexInserted { .. } => "vertex_inserted",
            DrawMessage::VertexUpdated { .. } => "vertex_updated",
            DrawMessage::VertexRemoved { .. } => "vertex_removed",
            DrawMessage::VertexEdited { .. } => "vertex_edited",
            DrawMessage::RightClick { .. } => "right_click",
            DrawMessage::ClearAll => "clear_all",
            DrawMessage::ClosePanel => "close_panel",
        }
    }
}
