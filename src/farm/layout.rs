//! Standard-grid layout generation.
//!
//! Turbines are placed on a `rows × columns` parallelogram grid: columns
//! spaced along the farm x axis, rows along the farm y axis, each row
//! sheared by `skew_factor` column widths. The grid is centered on the
//! origin and rotated rigidly by the farm orientation.

use crate::config::LayoutConfig;

use super::turbine::{Turbine, TurbineSet};

/// Heading offset applied to alternating rows in the staggered mooring pattern.
const STAGGER_DELTA_DEG: f32 = 30.0;

/// Generates the turbine set described by the farm configuration.
///
/// Deterministic: identical configurations produce identical layouts. The
/// farm centroid lands on the origin; translation offsets are applied
/// afterwards by [`crate::farm::transform::translate`].
pub fn generate(config: &LayoutConfig) -> TurbineSet {
    let farm = &config.farm;
    let sx_m = farm.dspacing_x * config.turbine.diameter_m;
    let sy_m = farm.dspacing_y * config.turbine.diameter_m;
    let theta = farm.orientation_deg.to_radians();
    let (sin_t, cos_t) = theta.sin_cos();

    // Grid centroid in local coordinates, subtracted so the farm is centered
    // on the origin before rotation.
    let n = (farm.rows * farm.columns) as f32;
    let mut cu = 0.0_f32;
    let mut cv = 0.0_f32;
    for row in 0..farm.rows {
        for col in 0..farm.columns {
            cu += (col as f32 + farm.skew_factor * row as f32) * sx_m;
            cv += row as f32 * sy_m;
        }
    }
    cu /= n;
    cv /= n;

    let mut set = TurbineSet::new();
    for row in 0..farm.rows {
        let mori_deg = match farm.mooring_pattern.as_str() {
            "staggered" => {
                let sign = if row % 2 == 0 { -1.0 } else { 1.0 };
                farm.orientation_deg + sign * STAGGER_DELTA_DEG
            }
            _ => farm.orientation_deg,
        };
        for col in 0..farm.columns {
            let u = (col as f32 + farm.skew_factor * row as f32) * sx_m - cu;
            let v = row as f32 * sy_m - cv;
            let x = u * cos_t - v * sin_t;
            let y = u * sin_t + v * cos_t;
            set.push(Turbine::new(x, y, mori_deg));
        }
    }
    set
}

/// Closed boundary polygon around the nominal grid extent, inflated by the
/// configured boundary limit.
///
/// Computed from the generated (untranslated) layout so that a subsequent
/// translation can carry turbines outside the boundary, which is accepted
/// and left to the caller to re-validate.
pub fn boundary_polygon(set: &TurbineSet, boundary_limit_m: f32) -> Vec<(f32, f32)> {
    let Some((min_x, min_y, max_x, max_y)) = set.bounds() else {
        return Vec::new();
    };
    let lo_x = min_x - boundary_limit_m;
    let lo_y = min_y - boundary_limit_m;
    let hi_x = max_x + boundary_limit_m;
    let hi_y = max_y + boundary_limit_m;
    vec![
        (lo_x, lo_y),
        (hi_x, lo_y),
        (hi_x, hi_y),
        (lo_x, hi_y),
        (lo_x, lo_y),
    ]
}
