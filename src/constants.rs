//! Global constants for wildmap

/// Estimate multipliers, per square kilometer of habitat.
pub mod estimate {
    /// Breeding bird pairs per km²
    pub const BREEDING_PAIRS_PER_KM2: f64 = 50.0;
    /// Migrating birds that can stop over per km²
    pub const STOPOVER_BIRDS_PER_KM2: f64 = 1000.0;
    /// Forest bird species supported per km² (rounded for display)
    pub const FOREST_SPECIES_PER_KM2: f64 = 0.3;
    /// Trees per km² of forest cover
    pub const TREES_PER_KM2: f64 = 150_000.0;
    /// Tons of CO₂ absorbed per km² per year
    pub const CO2_TONS_PER_KM2_YEAR: f64 = 3000.0;
}

/// Display formatting.
pub mod display {
    /// Maximum fraction digits shown for grouped numbers
    pub const MAX_FRACTION_DIGITS: usize = 3;
    /// Thousands separator
    pub const GROUP_SEPARATOR: char = ',';
    /// Area unit suffix
    pub const AREA_UNIT: &str = "km²";
}
