//! Geographic rings and geodesic area models for wildmap.
//!
//! A [`Ring`] is an ordered, implicitly closed boundary of [`LatLng`] vertices.
//! Area is computed through the [`AreaCalculator`] capability so callers can swap the
//! Earth model (or a fixture) without touching the code that owns the rings.

mod area;
mod point;
mod ring;

pub use area::{
    AreaCalculator, AreaModel, EARTH_RADIUS_M, EllipsoidalArea, PlanarArea,
    SQUARE_METERS_PER_SQUARE_KILOMETER, SphericalArea,
};
pub use point::LatLng;
pub use ring::{MIN_RING_VERTICES, Ring, RingEdit};
