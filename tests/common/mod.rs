//! Shared test fixtures for integration tests.

use wakeview::config::LayoutConfig;
use wakeview::pass::Adjustments;

/// Default baseline configuration (4×4 grid, 7D spacing, 15 MW turbines).
pub fn default_config() -> LayoutConfig {
    LayoutConfig::baseline()
}

/// Zero-effect adjustments matching the baseline configuration.
pub fn default_adjustments(config: &LayoutConfig) -> Adjustments {
    Adjustments::from_config(config)
}

/// Planar distance between two turbines of a set.
pub fn turbine_distance(set: &wakeview::farm::TurbineSet, i: usize, j: usize) -> f32 {
    let a = set.get(i).expect("turbine i");
    let b = set.get(j).expect("turbine j");
    ((a.x_m - b.x_m).powi(2) + (a.y_m - b.y_m).powi(2)).sqrt()
}
