//! Polygons drawn by the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use wildmap_geo::{AreaCalculator, Ring, RingEdit};

/// Identity of a drawn polygon within a session. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonHandle(pub u64);

impl fmt::Display for PolygonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A drawn polygon with its cached area.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnPolygon {
    handle: PolygonHandle,
    ring: Ring,
    /// Area in km², `None` after a ring mutation until recomputed.
    area_km2: Option<f64>,
}

impl DrawnPolygon {
    pub fn new(handle: PolygonHandle, ring: Ring) -> Self {
        Self {
            handle,
            ring,
            area_km2: None,
        }
    }

    pub fn handle(&self) -> PolygonHandle {
        self.handle
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The cached area, if it is still valid.
    pub fn cached_area(&self) -> Option<f64> {
        self.area_km2
    }

    /// Replace the ring wholesale. Invalidates the cached area.
    pub fn replace_ring(&mut self, ring: Ring) {
        self.ring = ring;
        self.area_km2 = None;
    }

    /// Apply a single vertex edit. The cached area is only invalidated when the edit
    /// was in range and applied.
    pub fn apply_edit(&mut self, edit: RingEdit) -> bool {
        let applied = self.ring.apply(edit);
        if applied {
            self.area_km2 = None;
        }
        applied
    }

    /// Return the cached area, computing it first if it was invalidated.
    pub fn area(&mut self, calculator: &dyn AreaCalculator) -> f64 {
        match self.area_km2 {
            Some(area) => area,
            None => {
                let area = calculator.area_km2(&self.ring);
                self.area_km2 = Some(area);
                area
            }
        }
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

    /// Reports one km² per vertex.
    fn per_vertex(ring: &Ring) -> f64 {
        ring.vertex_count() as f64 * 1_000_000.0
    }

    #[test]
    fn test_area_is_cached_until_mutation() {
        let mut polygon = DrawnPolygon::new(PolygonHandle(1), ring());
        assert_eq!(polygon.cached_area(), None);

        assert_eq!(polygon.area(&per_vertex), 3.0);
        assert_eq!(polygon.cached_area(), Some(3.0));

        assert!(polygon.apply_edit(RingEdit::Insert {
            index: 3,
            point: LatLng::new(1.0, 0.0),
        }));
        assert_eq!(polygon.cached_area(), None);
        assert_eq!(polygon.area(&per_vertex), 4.0);
    }

    #[test]
    fn test_rejected_edit_keeps_cache() {
        let mut polygon = DrawnPolygon::new(PolygonHandle(3), ring());
        polygon.area(&per_vertex);

        assert!(!polygon.apply_edit(RingEdit::Remove { index: 9 }));
        assert!(!polygon.apply_edit(RingEdit::Set {
            index: 3,
            point: LatLng::new(5.0, 5.0),
        }));
        assert_eq!(polygon.cached_area(), Some(3.0));
        assert_eq!(polygon.ring(), &ring());
    }

    #[test]
    fn test_replace_ring_invalidates() {
        let mut polygon = DrawnPolygon::new(PolygonHandle(7), ring());
        polygon.area(&per_vertex);
        polygon.replace_ring(Ring::default());
        assert_eq!(polygon.cached_area(), None);
        assert_eq!(polygon.area(&per_vertex), 0.0);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(PolygonHandle(42).to_string(), "#42");
    }
}
