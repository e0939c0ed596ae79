//! API response and query types.
//!
//! Turbine field names follow the layout CSV schema for consistency across
//! export formats.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::farm::Turbine;
use crate::pass::Adjustments;
use crate::report::SummaryReport;

/// Combined state response: configuration, adjustments, and summary.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    /// Configuration the pass ran with.
    pub config: LayoutConfig,
    /// Adjustment values applied in the pass.
    pub adjustments: Adjustments,
    /// Aggregate summary metrics.
    pub summary: SummaryReport,
}

/// Single turbine record using layout CSV field names.
#[derive(Debug, Serialize)]
pub struct TurbineRecord {
    /// Turbine index (display order).
    pub index: usize,
    /// Easting position (m).
    pub x_m: f32,
    /// Northing position (m).
    pub y_m: f32,
    /// Mooring spread heading (degrees).
    pub mori_deg: f32,
    /// Anchor positions as `(x, y)` pairs.
    pub anchors: Vec<(f32, f32)>,
}

impl TurbineRecord {
    /// Builds a record from a turbine and its index.
    pub fn from_turbine(index: usize, t: &Turbine) -> Self {
        Self {
            index,
            x_m: t.x_m,
            y_m: t.y_m,
            mori_deg: t.mori_deg,
            anchors: t.anchors.clone(),
        }
    }
}

/// Optional index-range query parameters for the layout endpoint.
#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Start index (inclusive).
    pub from: Option<usize>,
    /// End index (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
