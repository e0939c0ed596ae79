//! Mooring anchor position computation.

use super::turbine::{N_ANCHORS, TurbineSet};

/// Fills each turbine's anchor list with [`N_ANCHORS`] positions spread
/// evenly around the mooring heading at the given radius.
///
/// Anchor `j` sits at heading `mori_deg + j · 360/N_ANCHORS`, measured
/// counterclockwise from east. Derived data: call again after any transform
/// that moves turbines or changes headings.
pub fn compute_anchors(set: &mut TurbineSet, spread_radius_m: f32) {
    let sector_deg = 360.0 / N_ANCHORS as f32;
    for turbine in set.iter_mut() {
        turbine.anchors.clear();
        for j in 0..N_ANCHORS {
            let heading = (turbine.mori_deg + j as f32 * sector_deg).to_radians();
            turbine.anchors.push((
                turbine.x_m + spread_radius_m * heading.cos(),
                turbine.y_m + spread_radius_m * heading.sin(),
            ));
        }
    }
}
