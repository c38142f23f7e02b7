//! Area analysis panel: the display-side consumer of area reports.

use serde::Serialize;

use crate::channel::AreaSink;
use crate::constants::display::{AREA_UNIT, GROUP_SEPARATOR, MAX_FRACTION_DIGITS};
use crate::model::{EstimateSet, derive_estimates};

/// One row of the estimate table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRow {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// A titled group of estimate rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateSection {
    pub title: &'static str,
    pub rows: Vec<EstimateRow>,
    pub footnote: &'static str,
}

/// Holds the reported area and whether the panel is showing.
///
/// A positive report opens the panel (when `auto_open` is set). A zero report never
/// opens it and never closes it; only [`close`](AreaPanel::close) does.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPanel {
    area_km2: f64,
    visible: bool,
    auto_open: bool,
}

impl Default for AreaPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AreaPanel {
    pub fn new(auto_open: bool) -> Self {
        Self {
            area_km2: 0.0,
            visible: false,
            auto_open,
        }
    }

    pub fn area(&self) -> f64 {
        self.area_km2
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether positive reports open the panel. Does not change the current visibility.
    pub fn set_auto_open(&mut self, auto_open: bool) {
        self.auto_open = auto_open;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Estimates for the current area.
    pub fn estimates(&self) -> EstimateSet {
        derive_estimates(self.area_km2)
    }

    /// The selected area, e.g. `"1,234.5 km²"`.
    pub fn area_label(&self) -> String {
        format!("{} {}", format_grouped(self.area_km2), AREA_UNIT)
    }

    /// The estimate table for the current area.
    pub fn sections(&self) -> Vec<EstimateSection> {
        let e = self.estimates();
        vec![
            EstimateSection {
                title: "Bird Habitat Potential",
                rows: vec![
                    row("Breeding bird pairs", e.breeding_pairs, "pairs"),
                    row("Migration stopover capacity", e.stopover_capacity, "birds"),
                    EstimateRow {
                        label: "Forest species supported",
                        value: e.forest_species.to_string(),
                        unit: "different species",
                    },
                ],
                footnote: "Estimates based on temperate forest bird densities and habitat requirements",
            },
            EstimateSection {
                title: "Environmental Estimates",
                rows: vec![
                    row("Approximate tree capacity", e.tree_capacity, "trees"),
                    row("CO₂ absorption potential", e.co2_tons_per_year, "tons/year"),
                ],
                footnote: "Estimates assume forest coverage and average tree density",
            },
        ]
    }
}

impl AreaSink for AreaPanel {
    fn report(&mut self, area_km2: f64) {
        self.area_km2 = area_km2;
        if self.auto_open && area_km2 > 0.0 && !self.visible {
            self.visible = true;
            log::debug!("📊 Area panel opened");
        }
    }
}

fn row(label: &'static str, value: f64, unit: &'static str) -> EstimateRow {
    EstimateRow {
        label,
        value: format_grouped(value),
        unit,
    }
}

/// Format a number with thousands grouping and at most three fraction digits,
/// rounding half away from zero and dropping trailing zeros: `1234567.8915` becomes
/// `"1,234,567.892"`.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{}∞", sign);
    }

    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let text = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if value < 0.0 && rounded != 0.0 {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(100.0), "100");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(300_000.0), "300,000");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(6196.329085825063), "6,196.329");
        assert_eq!(format_grouped(617.25), "617.25");
        assert_eq!(format_grouped(0.0004), "0");
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
    }

    #[test]
    fn test_positive_report_opens() {
        let mut panel = AreaPanel::default();
        assert!(!panel.is_visible());

        panel.report(2.0);
        assert!(panel.is_visible());
        assert_eq!(panel.area(), 2.0);
    }

    #[test]
    fn test_zero_report_neither_opens_nor_closes() {
        let mut panel = AreaPanel::default();
        panel.report(0.0);
        assert!(!panel.is_visible());

        panel.report(5.0);
        panel.report(0.0);
        assert!(panel.is_visible());
        assert_eq!(panel.area(), 0.0);

        panel.close();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_auto_open_disabled() {
        let mut panel = AreaPanel::new(false);
        panel.report(5.0);
        assert!(!panel.is_visible());
        assert_eq!(panel.area(), 5.0);
    }

    #[test]
    fn test_toggle_auto_open() {
        let mut panel = AreaPanel::new(false);
        panel.report(1.0);
        assert!(!panel.is_visible());

        panel.set_auto_open(true);
        panel.report(2.0);
        assert!(panel.is_visible());

        panel.set_auto_open(false);
        assert!(panel.is_visible());
        panel.close();
        panel.report(3.0);
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_sections_for_two_square_kilometers() {
        let mut panel = AreaPanel::default();
        panel.report(2.0);
        assert_eq!(panel.area_label(), "2 km²");

        let sections = panel.sections();
        assert_eq!(sections.len(), 2);

        let values: Vec<(&str, &str)> = sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|r| (r.label, r.value.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Breeding bird pairs", "100"),
                ("Migration stopover capacity", "2,000"),
                ("Forest species supported", "1"),
                ("Approximate tree capacity", "300,000"),
                ("CO₂ absorption potential", "6,000"),
            ]
        );
        assert_eq!(sections[1].rows[1].unit, "tons/year");
    }
}
