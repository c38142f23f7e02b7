//! Habitat estimates derived from a drawn area.
//!
//! Every estimate is a fixed multiple of the area in km². These are heuristics for
//! temperate forest cover, not measurements, and no plausibility checks are applied.

use serde::Serialize;

use crate::constants::estimate::{
    BREEDING_PAIRS_PER_KM2, CO2_TONS_PER_KM2_YEAR, FOREST_SPECIES_PER_KM2,
    STOPOVER_BIRDS_PER_KM2, TREES_PER_KM2,
};

/// The estimates shown for one area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateSet {
    /// Area the estimates were derived from, in km²
    pub area_km2: f64,
    /// Breeding bird pairs
    pub breeding_pairs: f64,
    /// Migrating birds that can stop over
    pub stopover_capacity: f64,
    /// Forest bird species supported, rounded to the nearest integer
    pub forest_species: u64,
    /// Trees the area can hold
    pub tree_capacity: f64,
    /// CO₂ absorption potential in tons per year
    pub co2_tons_per_year: f64,
}

/// Derive the estimate set for `area_km2`.
pub fn derive_estimates(area_km2: f64) -> EstimateSet {
    EstimateSet {
        area_km2,
        breeding_pairs: area_km2 * BREEDING_PAIRS_PER_KM2,
        stopover_capacity: area_km2 * STOPOVER_BIRDS_PER_KM2,
        forest_species: round_count(area_km2 * FOREST_SPECIES_PER_KM2),
        tree_capacity: area_km2 * TREES_PER_KM2,
        co2_tons_per_year: area_km2 * CO2_TONS_PER_KM2_YEAR,
    }
}

/// Round to the nearest non-negative count, halves away from zero.
/// Negative and NaN inputs count as zero.
fn round_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.round() as u64
    }
}

impl EstimateSet {
    /// Estimates for an empty selection.
    pub fn zero() -> Self {
        derive_estimates(0.0)
    }
}
