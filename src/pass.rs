//! The synchronous regenerate pass: adjustments in, layout and metrics out.
//!
//! Every user interaction runs one complete pass — there is no incremental
//! update and no shared mutable state between passes. [`regenerate`] is a
//! pure function of the base configuration and the adjustment values.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::farm::{TurbineSet, anchors, layout, transform};
use crate::report::SummaryReport;
use crate::wake::flow_map::{self, FlowMap};
use crate::wake::{EnergyTable, Site, loss, model};

/// Grid resolution of the flow map computed each pass.
const FLOW_MAP_RESOLUTION: usize = 48;

/// Default selected wind direction (degrees).
pub const DEFAULT_WIND_DIRECTION_DEG: f32 = 0.0;

/// Default selected wind speed (m/s).
pub const DEFAULT_WIND_SPEED_MS: f32 = 11.0;

/// User-adjustable parameters collected from the interactive surface.
///
/// [`Adjustments::from_config`] seeds every field from the configuration so
/// that an untouched adjustment set is a zero-effect edit: regenerating with
/// it reproduces the configured layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustments {
    /// Column spacing (rotor diameters).
    pub spacing_x: f32,
    /// Row spacing (rotor diameters).
    pub spacing_y: f32,
    /// Farm orientation input α (degrees); applied as `orientation = 90 − α`.
    pub alpha_deg: f32,
    /// Skew angle β (degrees); applied as `skew = tan(β) · sx / sy`.
    pub beta_deg: f32,
    /// Mooring heading delta γ (degrees), subtracted from every heading.
    pub gamma_deg: f32,
    /// Translation coefficient along x (column spacings).
    pub dx_coeff: f32,
    /// Translation coefficient along y (row spacings).
    pub dy_coeff: f32,
    /// Mooring line spread radius (m).
    pub spread_radius_m: f32,
    /// Boundary clearance (m).
    pub boundary_limit_m: f32,
    /// Selected wind direction (degrees).
    pub wind_direction_deg: f32,
    /// Selected wind speed (m/s).
    pub wind_speed_ms: f32,
}

impl Adjustments {
    /// Seeds adjustments matching the configuration's current values.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let farm = &config.farm;
        Self {
            spacing_x: farm.dspacing_x,
            spacing_y: farm.dspacing_y,
            alpha_deg: 90.0 - farm.orientation_deg,
            beta_deg: (farm.skew_factor * farm.dspacing_y / farm.dspacing_x)
                .atan()
                .to_degrees(),
            gamma_deg: 0.0,
            dx_coeff: 0.0,
            dy_coeff: 0.0,
            spread_radius_m: farm.mooring_spread_radius_m,
            boundary_limit_m: farm.boundary_limit_m,
            wind_direction_deg: DEFAULT_WIND_DIRECTION_DEG,
            wind_speed_ms: DEFAULT_WIND_SPEED_MS,
        }
    }

    /// Largest skew angle β that keeps the row shear within one column,
    /// `atan2(sy, sx)` in degrees.
    pub fn beta_max_deg(&self) -> f32 {
        self.spacing_y.atan2(self.spacing_x).to_degrees()
    }

    /// Applies the geometric adjustments to a copy of the base configuration.
    fn applied(&self, base: &LayoutConfig) -> LayoutConfig {
        let mut config = base.clone();
        config.farm.dspacing_x = self.spacing_x;
        config.farm.dspacing_y = self.spacing_y;
        config.farm.orientation_deg = 90.0 - self.alpha_deg;
        config.farm.skew_factor =
            self.beta_deg.to_radians().tan() * self.spacing_x / self.spacing_y;
        config.farm.mooring_spread_radius_m = self.spread_radius_m;
        config.farm.boundary_limit_m = self.boundary_limit_m;
        config
    }
}

/// Everything one pass produces for rendering and reporting.
#[derive(Debug, Clone)]
pub struct PassResult {
    /// Configuration the pass actually ran with (base + adjustments).
    pub config: LayoutConfig,
    /// Final turbine set: generated, transformed, anchors computed.
    pub turbines: TurbineSet,
    /// Closed farm boundary polygon around the nominal (untranslated) extent.
    pub boundary: Vec<(f32, f32)>,
    /// Energy table without wake losses.
    pub without_wake: EnergyTable,
    /// Energy table with wake losses.
    pub with_wake: EnergyTable,
    /// Flow map for the selected wind condition.
    pub flow_map: FlowMap,
    /// Aggregate metrics.
    pub summary: SummaryReport,
}

/// Runs one complete pass: regenerate the layout from the adjusted
/// configuration, run the wake model, apply the rigid transforms, recompute
/// anchors, and evaluate the selected-bin wake loss.
///
/// The wake tables are computed on the untransformed layout; the translation
/// is rigid and the heading delta does not move turbines, so wake physics
/// are unchanged by the transforms.
pub fn regenerate(base: &LayoutConfig, adjustments: &Adjustments) -> PassResult {
    let config = adjustments.applied(base);

    let mut turbines = layout::generate(&config);
    let boundary = layout::boundary_polygon(&turbines, config.farm.boundary_limit_m);

    let site = Site::from_config(&config.site);
    let wake = model::run(&turbines, &site, &config.turbine);

    transform::translate(
        &mut turbines,
        adjustments.dx_coeff,
        adjustments.dy_coeff,
        config.farm.dspacing_x,
        config.farm.dspacing_y,
        config.turbine.diameter_m,
    );
    transform::rotate_moorings(&mut turbines, adjustments.gamma_deg);
    anchors::compute_anchors(&mut turbines, config.farm.mooring_spread_radius_m);

    let flow_map = flow_map::compute(
        &turbines,
        &config.turbine,
        adjustments.wind_direction_deg,
        adjustments.wind_speed_ms,
        FLOW_MAP_RESOLUTION,
    );

    let local_wake_loss_pct = loss::local_wake_loss_pct(
        &wake.with_wake,
        &wake.without_wake,
        adjustments.wind_direction_deg,
        adjustments.wind_speed_ms,
    );

    let summary = SummaryReport {
        turbine_count: turbines.len(),
        capacity_mw: config.turbine.rated_mw * turbines.len() as f32,
        aep_gwh: wake.aep_with_gwh,
        wake_loss_pct: wake.wake_effects_pct,
        local_wake_loss_pct,
        wind_direction_deg: adjustments.wind_direction_deg,
        wind_speed_ms: adjustments.wind_speed_ms,
    };

    PassResult {
        config,
        turbines,
        boundary,
        without_wake: wake.without_wake,
        with_wake: wake.with_wake,
        flow_map,
        summary,
    }
}
