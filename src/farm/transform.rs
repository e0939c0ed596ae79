//! Rigid transforms applied to an already-generated layout.
//!
//! Both operations mutate the turbine set in place and are pure in their
//! inputs: zero deltas leave the set bit-identical. Neither checks the
//! farm boundary; positions outside it are representable and left to the
//! next regeneration to re-validate.

use super::turbine::TurbineSet;

/// Shifts every turbine by the same offset, expressed as coefficients of
/// the farm spacing axes scaled by rotor diameter.
///
/// The applied offset is
/// `(dx_coeff · spacing_x · diameter, dy_coeff · spacing_y · diameter)`,
/// identical for all turbines. Positions are the only fields touched.
pub fn translate(
    set: &mut TurbineSet,
    dx_coeff: f32,
    dy_coeff: f32,
    spacing_x: f32,
    spacing_y: f32,
    diameter_m: f32,
) {
    let dx_m = dx_coeff * spacing_x * diameter_m;
    let dy_m = dy_coeff * spacing_y * diameter_m;
    for turbine in set.iter_mut() {
        turbine.x_m += dx_m;
        turbine.y_m += dy_m;
    }
}

/// Decreases every turbine's mooring heading by `gamma_deg`.
///
/// No wraparound is applied: headings may leave the 0–360 range, which is
/// accepted behavior, not corrected.
pub fn rotate_moorings(set: &mut TurbineSet, gamma_deg: f32) {
    for turbine in set.iter_mut() {
        turbine.mori_deg -= gamma_deg;
    }
}
