//! Area of a ring on a model of the Earth.

use geo::orient::Direction;
use geo::{Area, ChamberlainDuquetteArea, Coord, GeodesicArea, LineString, Orient, Polygon};
use serde::{Deserialize, Serialize};

use crate::Ring;

pub const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1_000_000.0;

/// WGS84 equatorial radius, the sphere used by web map SDKs for spherical area.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Computes the surface area enclosed by a ring.
///
/// Implementors only provide [`area_m2`](AreaCalculator::area_m2); the sign of that value
/// is never exposed, [`area_km2`](AreaCalculator::area_km2) reports the magnitude and
/// maps degenerate rings to zero.
pub trait AreaCalculator {
    /// Area enclosed by `ring` in square meters. May be signed by winding.
    fn area_m2(&self, ring: &Ring) -> f64;

    /// Unsigned area enclosed by `ring` in square kilometers.
    fn area_km2(&self, ring: &Ring) -> f64 {
        if ring.is_degenerate() {
            return 0.0;
        }

        let area = self.area_m2(ring).abs() / SQUARE_METERS_PER_SQUARE_KILOMETER;
        if area.is_finite() {
            area
        } else {
            log::warn!("Non-finite area for ring of {} vertices", ring.vertex_count());
            0.0
        }
    }
}

/// Fixture calculators: any `Fn(&Ring) -> f64` returning square meters.
impl<F> AreaCalculator for F
where
    F: Fn(&Ring) -> f64,
{
    fn area_m2(&self, ring: &Ring) -> f64 {
        self(ring)
    }
}

/// Area on a sphere of radius [`EARTH_RADIUS_M`], the model used by the host map's
/// spherical area function.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalArea;

impl AreaCalculator for SphericalArea {
    fn area_m2(&self, ring: &Ring) -> f64 {
        ring.to_polygon().chamberlain_duquette_unsigned_area()
    }
}

/// Geodesic area on the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipsoidalArea;

impl AreaCalculator for EllipsoidalArea {
    fn area_m2(&self, ring: &Ring) -> f64 {
        // Karney's algorithm reads a clockwise exterior as the rest of the globe
        ring.to_polygon()
            .orient(Direction::Default)
            .geodesic_area_unsigned()
    }
}

/// Planar area after an equirectangular projection centred on the ring's mean
/// latitude. Only accurate for small rings away from the poles and antimeridian.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarArea;

impl AreaCalculator for PlanarArea {
    fn area_m2(&self, ring: &Ring) -> f64 {
        let points = ring.open_points();
        if points.is_empty() {
            return 0.0;
        }

        let mean_lat = points.iter().map(|p| p.lat).sum::<f64>() / points.len() as f64;
        let x_scale = EARTH_RADIUS_M * mean_lat.to_radians().cos();

        let projected: LineString<f64> = points
            .iter()
            .map(|p| Coord {
                x: p.lng.to_radians() * x_scale,
                y: p.lat.to_radians() * EARTH_RADIUS_M,
            })
            .collect::<Vec<_>>()
            .into();

        Polygon::new(projected, vec![]).unsigned_area()
    }
}

/// Selectable Earth model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaModel {
    /// Sphere with the WGS84 equatorial radius
    #[default]
    Spherical,
    /// WGS84 ellipsoid
    Ellipsoidal,
    /// Equirectangular planar approximation
    Planar,
}

impl AreaModel {
    /// Get the display name for this model.
    pub fn name(&self) -> &'static str {
        match self {
            AreaModel::Spherical => "Spherical",
            AreaModel::Ellipsoidal => "Ellipsoidal",
            AreaModel::Planar => "Planar",
        }
    }

    /// Get all models.
    pub fn all() -> &'static [AreaModel] {
        &[
            AreaModel::Spherical,
            AreaModel::Ellipsoidal,
            AreaModel::Planar,
        ]
    }

    /// Build the calculator for this model.
    pub fn calculator(self) -> Box<dyn AreaCalculator> {
        match self {
            AreaModel::Spherical => Box::new(SphericalArea),
            AreaModel::Ellipsoidal => Box::new(EllipsoidalArea),
            AreaModel::Planar => Box::new(PlanarArea),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatLng;

    fn triangle() -> Ring {
        Ring::new(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 0.0),
            LatLng::new(0.0, 1.0),
        ])
    }

    /// Central angle between two points (haversine).
    fn central_angle(a: LatLng, b: LatLng) -> f64 {
        let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlng = (b.lng - a.lng).to_radians();
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * h.sqrt().asin()
    }

    /// Exact spherical triangle area via L'Huilier's theorem, in km².
    fn lhuilier_km2(a: LatLng, b: LatLng, c: LatLng) -> f64 {
        let (ab, bc, ca) = (central_angle(a, b), central_angle(b, c), central_angle(c, a));
        let s = (ab + bc + ca) / 2.0;
        let t = (s / 2.0).tan()
            * ((s - ab) / 2.0).tan()
            * ((s - bc) / 2.0).tan()
            * ((s - ca) / 2.0).tan();
        let excess = 4.0 * t.sqrt().atan();
        excess * EARTH_RADIUS_M * EARTH_RADIUS_M / SQUARE_METERS_PER_SQUARE_KILOMETER
    }

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn test_triangle_matches_spherical_excess() {
        let ring = triangle();
        let p = ring.points();
        let expected = lhuilier_km2(p[0], p[1], p[2]);
        // ~6196 km² for a one degree right triangle on the equator
        assert!((expected - 6196.0).abs() < 5.0);

        let actual = SphericalArea.area_km2(&ring);
        assert!(
            relative_error(actual, expected) < 0.01,
            "spherical {} vs exact {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_models_agree_on_small_rings() {
        let ring = triangle();
        let spherical = SphericalArea.area_km2(&ring);

        for model in AreaModel::all() {
            let area = model.calculator().area_km2(&ring);
            assert!(
                relative_error(area, spherical) < 0.01,
                "{} area {} vs spherical {}",
                model.name(),
                area,
                spherical
            );
        }
    }

    #[test]
    fn test_degenerate_rings_have_zero_area() {
        let rings = [
            Ring::default(),
            Ring::new(vec![LatLng::new(10.0, 10.0)]),
            Ring::new(vec![LatLng::new(10.0, 10.0), LatLng::new(11.0, 11.0)]),
        ];

        for ring in &rings {
            for model in AreaModel::all() {
                assert_eq!(model.calculator().area_km2(ring), 0.0);
            }
        }
    }

    #[test]
    fn test_winding_does_not_change_magnitude() {
        let ring = Ring::new(vec![
            LatLng::new(52.0, 4.0),
            LatLng::new(52.5, 4.2),
            LatLng::new(52.4, 5.1),
            LatLng::new(51.9, 4.9),
        ]);
        let reversed = ring.reversed();

        for model in AreaModel::all() {
            let calculator = model.calculator();
            let forward = calculator.area_km2(&ring);
            let backward = calculator.area_km2(&reversed);
            assert!(forward > 0.0);
            assert!(
                relative_error(backward, forward) < 1e-9,
                "{}: {} vs {}",
                model.name(),
                forward,
                backward
            );
        }
    }

    #[test]
    fn test_repeated_closing_vertex_is_ignored() {
        let open = triangle();
        let mut closed = triangle();
        closed.insert(3, LatLng::new(0.0, 0.0));

        for model in AreaModel::all() {
            let calculator = model.calculator();
            assert_eq!(calculator.area_km2(&open), calculator.area_km2(&closed));
        }
    }

    #[test]
    fn test_closure_fixture() {
        let fixture = |ring: &Ring| -> f64 { -(ring.vertex_count() as f64) * 1_000_000.0 };
        assert_eq!(fixture.area_km2(&triangle()), 3.0);
        assert_eq!(fixture.area_km2(&Ring::default()), 0.0);
    }

    #[test]
    fn test_non_finite_area_reports_zero() {
        let fixture = |_: &Ring| f64::NAN;
        assert_eq!(fixture.area_km2(&triangle()), 0.0);
    }

    #[test]
    fn test_model_serde_names() {
        assert_eq!(AreaModel::default(), AreaModel::Spherical);
        assert_eq!(AreaModel::Ellipsoidal.name(), "Ellipsoidal");
    }
}
