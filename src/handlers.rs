//! Message handler for the polygon drawing workflow.

use crate::message::DrawMessage;
use crate::panel::format_grouped;
use crate::state::DrawingView;

/// Handle a drawing message.
pub fn handle_draw(msg: DrawMessage, view: &mut DrawingView) {
    if msg.is_tool_event() && !view.controller.is_active() {
        log::debug!("Dropped {} while the drawing tool is disarmed", msg.kind());
        return;
    }

    match msg {
        DrawMessage::SurfaceMounted { mounted } => {
            view.surface_mounted = mounted;
            if !mounted {
                view.controller.deactivate();
            }
            log::debug!("🗺️ Map surface mounted: {}", mounted);
        }
        DrawMessage::SetMapMode { mode } => {
            view.controller.set_map_mode(mode, view.surface_mounted);
        }
        DrawMessage::ActivateTool => {
            view.controller.activate(view.surface_mounted);
        }
        DrawMessage::DeactivateTool => {
            view.controller.deactivate();
        }
        DrawMessage::SelectOverlay { overlay } => {
            if let Err(e) = view.controller.select_overlay(overlay) {
                log::warn!("{}", e);
                view.status_message = Some(e.to_string());
            }
        }
        DrawMessage::PolygonCompleted { ring } => {
            let handle = view.with_lifecycle(|lifecycle| lifecycle.on_polygon_completed(ring));
            view.controller.on_ring_completed();
            view.status_message = Some(format!(
                "Polygon {}: {}",
                handle,
                view.panel.area_label()
            ));
        }
        DrawMessage::VertexInserted { handle, ring } => {
            view.with_lifecycle(|lifecycle| lifecycle.on_vertex_inserted(handle, ring));
        }
        DrawMessage::VertexUpdated { handle, ring } => {
            view.with_lifecycle(|lifecycle| lifecycle.on_vertex_updated(handle, ring));
        }
        DrawMessage::VertexRemoved { handle, ring } => {
            view.with_lifecycle(|lifecycle| lifecycle.on_vertex_removed(handle, ring));
        }
        DrawMessage::VertexEdited { handle, edit } => {
            view.with_lifecycle(|lifecycle| lifecycle.apply_edit(handle, edit));
        }
        DrawMessage::RightClick { handle } => {
            if view.with_lifecycle(|lifecycle| lifecycle.on_polygon_deleted(handle)) {
                view.status_message = Some(format!("Deleted polygon {}", handle));
            }
        }
        DrawMessage::ClearAll => {
            let count = view.with_lifecycle(|lifecycle| lifecycle.clear_all());
            view.status_message = Some(format!("Cleared {} polygons", count));
        }
        DrawMessage::ClosePanel => {
            view.panel.close();
            log::debug!(
                "📊 Area panel closed at {} km²",
                format_grouped(view.panel.area())
            );
        }
    }
}
