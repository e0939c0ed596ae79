//! Turbine records and the ordered turbine set.

use std::fmt;

use serde::Serialize;

/// Number of mooring lines (and anchors) per floating turbine.
pub const N_ANCHORS: usize = 3;

/// One floating turbine in the farm.
///
/// Positions are planar easting/northing coordinates in meters. The mooring
/// orientation is the heading of the first mooring line; it is not normalized
/// to 0–360 and may leave that range after a heading-delta transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turbine {
    /// Easting position (m).
    pub x_m: f32,
    /// Northing position (m).
    pub y_m: f32,
    /// Mooring spread heading (degrees).
    pub mori_deg: f32,
    /// Anchor positions, filled by [`crate::farm::anchors::compute_anchors`].
    /// Empty until anchors have been computed for the current geometry.
    pub anchors: Vec<(f32, f32)>,
}

impl Turbine {
    /// Creates a turbine at the given position and mooring heading, with no
    /// anchors computed yet.
    pub fn new(x_m: f32, y_m: f32, mori_deg: f32) -> Self {
        Self {
            x_m,
            y_m,
            mori_deg,
            anchors: Vec::new(),
        }
    }
}

impl fmt::Display for Turbine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:>9.1} m  y={:>9.1} m  mori={:>7.1}°",
            self.x_m, self.y_m, self.mori_deg
        )
    }
}

/// Ordered collection of turbines.
///
/// Turbines are identified by their dense integer index; insertion order is
/// the display order, matching the upstream engine's record keying.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TurbineSet {
    turbines: Vec<Turbine>,
}

impl TurbineSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turbine; its index is the current length.
    pub fn push(&mut self, turbine: Turbine) {
        self.turbines.push(turbine);
    }

    /// Number of turbines.
    pub fn len(&self) -> usize {
        self.turbines.len()
    }

    /// Returns `true` when the set holds no turbines.
    pub fn is_empty(&self) -> bool {
        self.turbines.is_empty()
    }

    /// Returns the turbine at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Turbine> {
        self.turbines.get(index)
    }

    /// Iterates turbines in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Turbine> {
        self.turbines.iter()
    }

    /// Iterates turbines mutably in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Turbine> {
        self.turbines.iter_mut()
    }

    /// Bounding box of turbine positions as `(min_x, min_y, max_x, max_y)`.
    ///
    /// Returns `None` for an empty set.
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let first = self.turbines.first()?;
        let mut b = (first.x_m, first.y_m, first.x_m, first.y_m);
        for t in &self.turbines {
            b.0 = b.0.min(t.x_m);
            b.1 = b.1.min(t.y_m);
            b.2 = b.2.max(t.x_m);
            b.3 = b.3.max(t.y_m);
        }
        Some(b)
    }
}
