//! Polygon lifecycle: creation, vertex edits, deletion and clearing.
//!
//! Every operation is a named transition over the [`DrawingSession`]. Operations that
//! change the geometry of a live polygon recompute its area and report it on the
//! [`AreaChannel`] before returning; each operation reports at most once. Events for
//! stale handles are ignored.

use std::fmt;

use wildmap_geo::{AreaCalculator, AreaModel, Ring, RingEdit};

use crate::channel::{AreaChannel, AreaSink, CLEARED_AREA};
use crate::model::{DrawnPolygon, PolygonHandle};
use crate::state::DrawingSession;

/// Which kind of vertex mutation triggered a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexChange {
    Inserted,
    Updated,
    Removed,
    Edited,
}

/// Owns the drawing session, the area capability and the reporting channel.
pub struct PolygonLifecycle {
    session: DrawingSession,
    calculator: Box<dyn AreaCalculator>,
    channel: AreaChannel,
}

impl fmt::Debug for PolygonLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolygonLifecycle")
            .field("session", &self.session)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl PolygonLifecycle {
    /// Create a lifecycle with an empty session and an unsubscribed channel.
    pub fn new(calculator: Box<dyn AreaCalculator>) -> Self {
        Self {
            session: DrawingSession::new(),
            calculator,
            channel: AreaChannel::new(),
        }
    }

    /// Create a lifecycle using one of the built-in Earth models.
    pub fn with_model(model: AreaModel) -> Self {
        Self::new(model.calculator())
    }

    /// Use `channel` for reports.
    pub fn with_channel(mut self, channel: AreaChannel) -> Self {
        self.channel = channel;
        self
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn channel(&self) -> &AreaChannel {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut AreaChannel {
        &mut self.channel
    }

    /// Register a just-completed ring, report its area and return its handle.
    pub fn on_polygon_completed(&mut self, ring: Ring) -> PolygonHandle {
        let handle = self.session.insert(ring);
        let area = self.current_area(handle);
        log::info!("✅ Created polygon {} ({:.3} km²)", handle, area);
        self.channel.report(area);
        handle
    }

    /// A vertex was inserted; `ring` is the ring after the insertion.
    pub fn on_vertex_inserted(&mut self, handle: PolygonHandle, ring: Ring) -> Option<f64> {
        self.replace_ring(handle, ring, VertexChange::Inserted)
    }

    /// A vertex was moved; `ring` is the ring after the move.
    pub fn on_vertex_updated(&mut self, handle: PolygonHandle, ring: Ring) -> Option<f64> {
        self.replace_ring(handle, ring, VertexChange::Updated)
    }

    /// A vertex was removed; `ring` is the ring after the removal.
    pub fn on_vertex_removed(&mut self, handle: PolygonHandle, ring: Ring) -> Option<f64> {
        self.replace_ring(handle, ring, VertexChange::Removed)
    }

    /// Apply a single vertex edit to the stored ring. Out-of-range edits are ignored.
    pub fn apply_edit(&mut self, handle: PolygonHandle, edit: RingEdit) -> Option<f64> {
        self.mutate(handle, VertexChange::Edited, |polygon| {
            let applied = polygon.apply_edit(edit);
            if !applied {
                log::debug!("Ignored out-of-range edit {:?} on polygon {}", edit, handle);
            }
            applied
        })
    }

    /// Remove a polygon. Nothing is reported, the channel keeps its last value.
    /// Returns false for a stale handle.
    pub fn on_polygon_deleted(&mut self, handle: PolygonHandle) -> bool {
        match self.session.remove(handle) {
            Some(_) => {
                log::info!("🗑️ Deleted polygon {}", handle);
                true
            }
            None => {
                log::debug!("Ignored delete for stale polygon {}", handle);
                false
            }
        }
    }

    /// Remove every polygon and report the cleared area. Returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let count = self.session.clear();
        log::info!("🗑️ Cleared {} polygons", count);
        self.channel.report(CLEARED_AREA);
        count
    }

    /// Area of a live polygon in km².
    pub fn area_of(&self, handle: PolygonHandle) -> Option<f64> {
        let polygon = self.session.get(handle)?;
        Some(
            polygon
                .cached_area()
                .unwrap_or_else(|| self.calculator.area_km2(polygon.ring())),
        )
    }

    /// Sum of the areas of all live polygons in km².
    pub fn total_area(&self) -> f64 {
        self.session
            .handles()
            .filter_map(|handle| self.area_of(handle))
            .sum()
    }

    pub fn last_edited(&self) -> Option<PolygonHandle> {
        self.session.last_edited()
    }

    pub fn len(&self) -> usize {
        self.session.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    fn replace_ring(
        &mut self,
        handle: PolygonHandle,
        ring: Ring,
        change: VertexChange,
    ) -> Option<f64> {
        self.mutate(handle, change, |polygon| {
            polygon.replace_ring(ring);
            true
        })
    }

    /// Run `mutate` on a live polygon; if it reports a change, recompute the area,
    /// mark the polygon as last edited and report.
    fn mutate<F>(&mut self, handle: PolygonHandle, change: VertexChange, mutate: F) -> Option<f64>
    where
        F: FnOnce(&mut DrawnPolygon) -> bool,
    {
        let Some(polygon) = self.session.get_mut(handle) else {
            log::debug!("Ignored {:?} vertex event for stale polygon {}", change, handle);
            return None;
        };

        if !mutate(polygon) {
            return None;
        }

        let area = self.current_area(handle);
        self.session.mark_edited(handle);
        log::debug!(
            "✏️ Polygon {} vertex {:?}, {} vertices, {:.3} km²",
            handle,
            change,
            self.session.get(handle).map_or(0, |p| p.ring().vertex_count()),
            area
        );
        self.channel.report(area);
        Some(area)
    }

    /// Area of a live polygon, recomputing the cache if it was invalidated.
    fn current_area(&mut self, handle: PolygonHandle) -> f64 {
        let calculator = self.calculator.as_ref();
        self.session
            .get_mut(handle)
            .map_or(CLEARED_AREA, |polygon| polygon.area(calculator))
    }
}
