//! The set of live polygons for one map view.

use std::collections::BTreeMap;

use wildmap_geo::Ring;

use crate::model::{DrawnPolygon, PolygonHandle};

/// Live polygons and which one was touched last.
///
/// Handles come from a counter and are never reused, so an event referring to a deleted
/// polygon can never hit a newer one.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    /// Live polygons keyed by handle (creation order).
    polygons: BTreeMap<PolygonHandle, DrawnPolygon>,
    /// Most recently created or edited polygon that is still live.
    last_edited: Option<PolygonHandle>,
    /// Counter for generating unique handles.
    next_id: u64,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            polygons: BTreeMap::new(),
            last_edited: None,
            next_id: 1,
        }
    }

    /// Register a completed ring and mark it as last edited.
    pub fn insert(&mut self, ring: Ring) -> PolygonHandle {
        let handle = PolygonHandle(self.next_id);
        self.next_id += 1;
        self.polygons.insert(handle, DrawnPolygon::new(handle, ring));
        self.last_edited = Some(handle);
        handle
    }

    /// Remove a polygon. Clears the last-edited marker if it pointed at it.
    pub fn remove(&mut self, handle: PolygonHandle) -> Option<DrawnPolygon> {
        let removed = self.polygons.remove(&handle);
        if self.last_edited == Some(handle) {
            self.last_edited = None;
        }
        removed
    }

    /// Remove every polygon. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.polygons.len();
        self.polygons.clear();
        self.last_edited = None;
        count
    }

    pub fn get(&self, handle: PolygonHandle) -> Option<&DrawnPolygon> {
        self.polygons.get(&handle)
    }

    pub fn get_mut(&mut self, handle: PolygonHandle) -> Option<&mut DrawnPolygon> {
        self.polygons.get_mut(&handle)
    }

    pub fn contains(&self, handle: PolygonHandle) -> bool {
        self.polygons.contains_key(&handle)
    }

    /// Mark a live polygon as the most recently edited one.
    pub fn mark_edited(&mut self, handle: PolygonHandle) {
        if self.contains(handle) {
            self.last_edited = Some(handle);
        }
    }

    pub fn last_edited(&self) -> Option<PolygonHandle> {
        self.last_edited
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawnPolygon> {
        self.polygons.values()
    }

    pub fn handles(&self) -> impl Iterator<Item = PolygonHandle> + '_ {
        self.polygons.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildmap_geo::LatLng;

    fn ring() -> Ring {
        Ring::new(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
        ])
    }

    #[test]
    fn test_insert_marks_last_edited() {
        let mut session = DrawingSession::new();
        let a = session.insert(ring());
        let b = session.insert(ring());

        assert_ne!(a, b);
        assert_eq!(session.len(), 2);
        assert_eq!(session.last_edited(), Some(b));

        session.mark_edited(a);
        assert_eq!(session.last_edited(), Some(a));
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut session = DrawingSession::new();
        let a = session.insert(ring());
        session.remove(a);
        session.clear();
        let b = session.insert(ring());
        assert!(b > a);
    }

    #[test]
    fn test_remove_clears_last_edited_only_for_that_polygon() {
        let mut session = DrawingSession::new();
        let a = session.insert(ring());
        let b = session.insert(ring());

        assert!(session.remove(a).is_some());
        assert_eq!(session.last_edited(), Some(b));

        assert!(session.remove(b).is_some());
        assert_eq!(session.last_edited(), None);
        assert!(session.remove(b).is_none());
    }

    #[test]
    fn test_mark_edited_ignores_dead_handles() {
        let mut session = DrawingSession::new();
        let a = session.insert(ring());
        session.remove(a);
        session.mark_edited(a);
        assert_eq!(session.last_edited(), None);
    }

    #[test]
    fn test_clear() {
        let mut session = DrawingSession::new();
        session.insert(ring());
        session.insert(ring());
        assert_eq!(session.clear(), 2);
        assert!(session.is_empty());
        assert_eq!(session.last_edited(), None);
        assert_eq!(session.handles().count(), 0);
    }
}
