//! Flow-map grid of effective wind speeds over the farm area.

use crate::config::TurbineConfig;
use crate::farm::TurbineSet;

use super::model::combined_deficit;

/// Grid padding around the turbine extent, in rotor diameters.
const PADDING_DIAMETERS: f32 = 3.0;

/// Regular grid of effective wind speeds for one (direction, speed) bin.
#[derive(Debug, Clone)]
pub struct FlowMap {
    /// Grid x coordinates (m), west to east.
    pub xs_m: Vec<f32>,
    /// Grid y coordinates (m), south to north.
    pub ys_m: Vec<f32>,
    /// `speeds_ms[yi][xi]`: effective wind speed at each grid point.
    pub speeds_ms: Vec<Vec<f32>>,
    /// Free-stream speed the deficits are applied to (m/s).
    pub free_stream_ms: f32,
}

impl FlowMap {
    /// Smallest effective speed on the grid, or the free stream for an
    /// empty map.
    pub fn min_speed_ms(&self) -> f32 {
        self.speeds_ms
            .iter()
            .flatten()
            .copied()
            .fold(self.free_stream_ms, f32::min)
    }
}

/// Computes a `resolution × resolution` flow map covering the turbine
/// extent plus padding, for wind from `wd_deg` at `ws_ms`.
///
/// An empty turbine set yields an empty map.
pub fn compute(
    set: &TurbineSet,
    turbine: &TurbineConfig,
    wd_deg: f32,
    ws_ms: f32,
    resolution: usize,
) -> FlowMap {
    let Some((min_x, min_y, max_x, max_y)) = set.bounds() else {
        return FlowMap {
            xs_m: Vec::new(),
            ys_m: Vec::new(),
            speeds_ms: Vec::new(),
            free_stream_ms: ws_ms,
        };
    };

    let pad = PADDING_DIAMETERS * turbine.diameter_m;
    let xs_m = grid_axis(min_x - pad, max_x + pad, resolution);
    let ys_m = grid_axis(min_y - pad, max_y + pad, resolution);

    let mut speeds_ms = Vec::with_capacity(ys_m.len());
    for &y in &ys_m {
        let mut row = Vec::with_capacity(xs_m.len());
        for &x in &xs_m {
            let deficit = combined_deficit(set, usize::MAX, x, y, wd_deg, turbine);
            row.push(ws_ms * (1.0 - deficit));
        }
        speeds_ms.push(row);
    }

    FlowMap {
        xs_m,
        ys_m,
        speeds_ms,
        free_stream_ms: ws_ms,
    }
}

/// Evenly spaced axis of `count` points from `lo` to `hi` inclusive.
fn grid_axis(lo: f32, hi: f32, count: usize) -> Vec<f32> {
    if count < 2 {
        return vec![lo];
    }
    let step = (hi - lo) / (count - 1) as f32;
    (0..count).map(|i| lo + i as f32 * step).collect()
}
