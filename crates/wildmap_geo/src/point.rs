use serde::{Deserialize, Serialize};

/// A geographic position in degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to a `geo` coordinate (x = longitude, y = latitude).
    pub fn to_coord(self) -> geo::Coord<f64> {
        geo::Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    /// Parse a flat `[lat, lng, lat, lng, ...]` buffer as handed over by JS hosts.
    /// A trailing odd value is ignored.
    pub fn from_flat(values: &[f64]) -> Vec<LatLng> {
        values
            .chunks_exact(2)
            .map(|pair| LatLng::new(pair[0], pair[1]))
            .collect()
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_coord_swaps_axes() {
        let coord = LatLng::new(51.5, -0.12).to_coord();
        assert_eq!(coord.x, -0.12);
        assert_eq!(coord.y, 51.5);
    }

    #[test]
    fn test_from_flat() {
        let points = LatLng::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(points, vec![LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0)]);
        assert!(LatLng::from_flat(&[]).is_empty());
    }
}
