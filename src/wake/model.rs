//! Top-hat wake deficit model and AEP table computation.

use crate::config::TurbineConfig;
use crate::farm::TurbineSet;

use super::site::Site;
use super::tables::EnergyTable;

/// Linear wake expansion coefficient for offshore conditions.
const WAKE_DECAY: f32 = 0.05;

/// Hours per year used for AEP integration.
const HOURS_PER_YEAR: f32 = 8760.0;

/// Result of one wake-model run over the full wind rose.
#[derive(Debug, Clone)]
pub struct WakeModelOutput {
    /// Energy table ignoring wake interference.
    pub without_wake: EnergyTable,
    /// Energy table with wake deficits applied.
    pub with_wake: EnergyTable,
    /// Farm AEP without wake losses (GWh/yr).
    pub aep_without_gwh: f32,
    /// Farm AEP with wake losses (GWh/yr).
    pub aep_with_gwh: f32,
    /// Total wake loss across the rose, percent of the no-wake AEP.
    pub wake_effects_pct: f32,
}

/// Runs the wake model for every (direction, speed) bin of the wind rose.
///
/// Both output tables share the site's axis vectors. The with-wake value of
/// a bin can never exceed its without-wake value since deficits only reduce
/// effective speed.
pub fn run(set: &TurbineSet, site: &Site, turbine: &TurbineConfig) -> WakeModelOutput {
    let directions = site.directions_deg().to_vec();
    let speeds = site.speeds_ms().to_vec();
    let mut without_wake = EnergyTable::new(directions.clone(), speeds.clone());
    let mut with_wake = EnergyTable::new(directions.clone(), speeds.clone());

    for (di, &wd) in directions.iter().enumerate() {
        for (si, &ws) in speeds.iter().enumerate() {
            let freq = site.frequency(di, si);
            let scale = freq * HOURS_PER_YEAR / 1000.0; // MW → GWh

            let free_power = power_mw(ws, turbine) * set.len() as f32;
            without_wake.set(di, si, free_power * scale);

            let mut waked_power = 0.0_f32;
            for (i, t) in set.iter().enumerate() {
                let deficit = combined_deficit(set, i, t.x_m, t.y_m, wd, turbine);
                waked_power += power_mw(ws * (1.0 - deficit), turbine);
            }
            with_wake.set(di, si, waked_power * scale);
        }
    }

    let aep_without_gwh = without_wake.total_gwh();
    let aep_with_gwh = with_wake.total_gwh();
    let wake_effects_pct = if aep_without_gwh > 0.0 {
        (aep_without_gwh - aep_with_gwh) / aep_without_gwh * 100.0
    } else {
        0.0
    };

    WakeModelOutput {
        without_wake,
        with_wake,
        aep_without_gwh,
        aep_with_gwh,
        wake_effects_pct,
    }
}

/// Combined wake deficit at a receptor point for wind from `wd_deg`.
///
/// `skip` excludes the receptor's own turbine index; pass `usize::MAX` for a
/// free-standing point (flow-map probes). Individual top-hat deficits are
/// superposed quadratically and capped at 1.
pub fn combined_deficit(
    set: &TurbineSet,
    skip: usize,
    px: f32,
    py: f32,
    wd_deg: f32,
    turbine: &TurbineConfig,
) -> f32 {
    let (dx, dy) = downwind_unit(wd_deg);
    let mut sum_sq = 0.0_f32;
    for (j, upstream) in set.iter().enumerate() {
        if j == skip {
            continue;
        }
        let sep_x = px - upstream.x_m;
        let sep_y = py - upstream.y_m;
        let downwind = sep_x * dx + sep_y * dy;
        if downwind <= 0.0 {
            continue;
        }
        let crosswind = (sep_x * dy - sep_y * dx).abs();
        let wake_radius = turbine.diameter_m / 2.0 + WAKE_DECAY * downwind;
        if crosswind >= wake_radius {
            continue;
        }
        let induction = 1.0 - (1.0 - turbine.thrust_coefficient).sqrt();
        let expansion = 1.0 + 2.0 * WAKE_DECAY * downwind / turbine.diameter_m;
        let deficit = induction / (expansion * expansion);
        sum_sq += deficit * deficit;
    }
    sum_sq.sqrt().min(1.0)
}

/// Electrical power (MW) at hub-height wind speed `ws`.
///
/// Piecewise: zero outside [cut-in, cut-out], cubic ramp between cut-in and
/// rated speed, flat at rated power above. Cut-out is inclusive so the power
/// curve stays monotone over the whole speed axis, which keeps waked
/// production at or below free-stream production bin-wise.
pub fn power_mw(ws: f32, turbine: &TurbineConfig) -> f32 {
    if ws < turbine.cut_in_ms || ws > turbine.cut_out_ms {
        return 0.0;
    }
    if ws >= turbine.rated_ms {
        return turbine.rated_mw;
    }
    let num = ws.powi(3) - turbine.cut_in_ms.powi(3);
    let den = turbine.rated_ms.powi(3) - turbine.cut_in_ms.powi(3);
    turbine.rated_mw * num / den
}

/// Unit vector pointing downwind for wind from compass direction `wd_deg`
/// (0° = from north, clockwise).
pub fn downwind_unit(wd_deg: f32) -> (f32, f32) {
    let theta = wd_deg.to_radians();
    (-theta.sin(), -theta.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutConfig, SiteConfig, TurbineConfig};
    use crate::farm::Turbine;
    use crate::farm::layout;

    const EPS: f32 = 1e-4;

    #[test]
    fn power_curve_endpoints() {
        let t = TurbineConfig::default();
        assert_eq!(power_mw(0.0, &t), 0.0);
        assert_eq!(power_mw(2.9, &t), 0.0);
        assert_eq!(power_mw(11.0, &t), 15.0);
        assert_eq!(power_mw(25.0, &t), 15.0);
        assert_eq!(power_mw(25.1, &t), 0.0);
    }

    #[test]
    fn power_curve_ramps_monotonically() {
        let t = TurbineConfig::default();
        let p5 = power_mw(5.0, &t);
        let p8 = power_mw(8.0, &t);
        assert!(p5 > 0.0);
        assert!(p8 > p5);
        assert!(p8 < t.rated_mw);
    }

    #[test]
    fn downwind_unit_points_away_from_source() {
        // Wind from north blows southward.
        let (dx, dy) = downwind_unit(0.0);
        assert!(dx.abs() < EPS);
        assert!((dy + 1.0).abs() < EPS);
        // Wind from west blows eastward.
        let (dx, dy) = downwind_unit(270.0);
        assert!((dx - 1.0).abs() < EPS);
        assert!(dy.abs() < EPS);
    }

    #[test]
    fn downstream_turbine_sees_a_deficit() {
        let t = TurbineConfig::default();
        let mut set = TurbineSet::new();
        set.push(Turbine::new(0.0, 0.0, 0.0));
        // 5 diameters east of the first turbine.
        set.push(Turbine::new(5.0 * t.diameter_m, 0.0, 0.0));

        // Wind from the west: second turbine is downstream.
        let d = combined_deficit(&set, 1, 5.0 * t.diameter_m, 0.0, 270.0, &t);
        assert!(d > 0.0, "downstream turbine should be waked, got {d}");

        // Upstream turbine is unaffected.
        let d0 = combined_deficit(&set, 0, 0.0, 0.0, 270.0, &t);
        assert_eq!(d0, 0.0);
    }

    #[test]
    fn deficit_decays_with_distance() {
        let t = TurbineConfig::default();
        let mut set = TurbineSet::new();
        set.push(Turbine::new(0.0, 0.0, 0.0));
        let near = combined_deficit(&set, usize::MAX, 3.0 * t.diameter_m, 0.0, 270.0, &t);
        let far = combined_deficit(&set, usize::MAX, 12.0 * t.diameter_m, 0.0, 270.0, &t);
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn crosswind_point_outside_wake_is_unaffected() {
        let t = TurbineConfig::default();
        let mut set = TurbineSet::new();
        set.push(Turbine::new(0.0, 0.0, 0.0));
        let d = combined_deficit(
            &set,
            usize::MAX,
            5.0 * t.diameter_m,
            10.0 * t.diameter_m,
            270.0,
            &t,
        );
        assert_eq!(d, 0.0);
    }

    #[test]
    fn tables_share_axes_and_wake_never_gains_energy() {
        let cfg = LayoutConfig::baseline();
        let set = layout::generate(&cfg);
        let site = Site::from_config(&cfg.site);
        let out = run(&set, &site, &cfg.turbine);

        assert!(out.without_wake.same_axes(&out.with_wake));
        for di in 0..out.without_wake.directions_deg().len() {
            for si in 0..out.without_wake.speeds_ms().len() {
                assert!(out.with_wake.get(di, si) <= out.without_wake.get(di, si) + EPS);
            }
        }
    }

    #[test]
    fn farm_has_positive_aep_and_bounded_loss() {
        let cfg = LayoutConfig::baseline();
        let set = layout::generate(&cfg);
        let site = Site::from_config(&cfg.site);
        let out = run(&set, &site, &cfg.turbine);

        assert!(out.aep_without_gwh > 0.0);
        assert!(out.aep_with_gwh > 0.0);
        assert!(out.aep_with_gwh <= out.aep_without_gwh);
        assert!(out.wake_effects_pct >= 0.0);
        assert!(out.wake_effects_pct < 100.0);
    }

    #[test]
    fn single_turbine_has_no_wake_loss() {
        let mut cfg = LayoutConfig::baseline();
        cfg.farm.rows = 1;
        cfg.farm.columns = 1;
        let set = layout::generate(&cfg);
        let site = Site::from_config(&SiteConfig::default());
        let out = run(&set, &site, &cfg.turbine);
        assert!(out.wake_effects_pct.abs() < EPS);
    }

    #[test]
    fn empty_set_reports_zero_loss() {
        let set = TurbineSet::new();
        let site = Site::from_config(&SiteConfig::default());
        let out = run(&set, &site, &TurbineConfig::default());
        assert_eq!(out.aep_without_gwh, 0.0);
        assert_eq!(out.wake_effects_pct, 0.0);
    }
}
