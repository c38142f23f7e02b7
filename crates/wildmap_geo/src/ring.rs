//! Closed polygon boundaries in geographic coordinates.

use geo::{LineString, Polygon};
use serde::{Deserialize, Serialize};

use crate::LatLng;

/// Minimum number of distinct vertices for a ring to enclose any area.
pub const MIN_RING_VERTICES: usize = 3;

/// An ordered boundary of vertices. The last vertex implicitly connects back to the
/// first; callers may or may not repeat the first vertex at the end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    points: Vec<LatLng>,
}

/// A single vertex edit as reported by a drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RingEdit {
    /// A vertex was inserted before `index` (`index == len` appends).
    Insert { index: usize, point: LatLng },
    /// The vertex at `index` was moved.
    Set { index: usize, point: LatLng },
    /// The vertex at `index` was removed.
    Remove { index: usize },
}

impl Ring {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct boundary vertices, not counting a repeated closing vertex.
    pub fn vertex_count(&self) -> usize {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 && first == last => {
                self.points.len() - 1
            }
            _ => self.points.len(),
        }
    }

    /// A ring with fewer than three vertices encloses nothing.
    pub fn is_degenerate(&self) -> bool {
        self.vertex_count() < MIN_RING_VERTICES
    }

    /// The vertices without a repeated closing vertex.
    pub fn open_points(&self) -> &[LatLng] {
        &self.points[..self.vertex_count()]
    }

    /// Insert a vertex before `index`. Returns false if `index` is past the end.
    pub fn insert(&mut self, index: usize, point: LatLng) -> bool {
        if index > self.points.len() {
            return false;
        }
        self.points.insert(index, point);
        true
    }

    /// Replace the vertex at `index`. Returns false if there is no such vertex.
    pub fn set(&mut self, index: usize, point: LatLng) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Remove the vertex at `index`.
    pub fn remove(&mut self, index: usize) -> Option<LatLng> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Apply an edit in place. Returns false (and leaves the ring untouched) if the
    /// edit's index is out of range.
    pub fn apply(&mut self, edit: RingEdit) -> bool {
        match edit {
            RingEdit::Insert { index, point } => self.insert(index, point),
            RingEdit::Set { index, point } => self.set(index, point),
            RingEdit::Remove { index } => self.remove(index).is_some(),
        }
    }

    /// The same boundary walked in the opposite direction.
    pub fn reversed(&self) -> Ring {
        let mut points = self.points.clone();
        points.reverse();
        Ring::new(points)
    }

    /// Build a hole-free `geo` polygon (x = longitude, y = latitude).
    pub fn to_polygon(&self) -> Polygon<f64> {
        let exterior: LineString<f64> = self
            .open_points()
            .iter()
            .map(|p| p.to_coord())
            .collect::<Vec<_>>()
            .into();
        Polygon::new(exterior, vec![])
    }
}

impl From<Vec<LatLng>> for Ring {
    fn from(points: Vec<LatLng>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<LatLng> for Ring {
    fn from_iter<I: IntoIterator<Item = LatLng>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
