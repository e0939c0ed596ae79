//! Energy tables indexed by wind direction and wind speed.

/// A direction × speed table of energy values (GWh/yr per bin).
///
/// The with-wake and without-wake tables produced by one wake-model run
/// share identical axis vectors; [`EnergyTable::same_axes`] checks the
/// invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTable {
    directions_deg: Vec<f32>,
    speeds_ms: Vec<f32>,
    /// `values[d][s]`, aligned with the axis vectors.
    values_gwh: Vec<Vec<f32>>,
}

impl EnergyTable {
    /// Creates a zeroed table over the given axes.
    pub fn new(directions_deg: Vec<f32>, speeds_ms: Vec<f32>) -> Self {
        let values_gwh = vec![vec![0.0; speeds_ms.len()]; directions_deg.len()];
        Self {
            directions_deg,
            speeds_ms,
            values_gwh,
        }
    }

    /// Wind direction axis values (degrees).
    pub fn directions_deg(&self) -> &[f32] {
        &self.directions_deg
    }

    /// Wind speed axis values (m/s).
    pub fn speeds_ms(&self) -> &[f32] {
        &self.speeds_ms
    }

    /// Sets the value of bin `(di, si)`.
    pub fn set(&mut self, di: usize, si: usize, value_gwh: f32) {
        self.values_gwh[di][si] = value_gwh;
    }

    /// Value of bin `(di, si)`.
    pub fn get(&self, di: usize, si: usize) -> f32 {
        self.values_gwh[di][si]
    }

    /// Selects the bin whose axis values equal `wd_deg` and `ws_ms` exactly.
    ///
    /// Selection is an equality match against the axis values, not an
    /// interpolation: a requested value that is not present on the axis
    /// yields `None` (documented limitation of the upstream selection
    /// semantics).
    pub fn select(&self, wd_deg: f32, ws_ms: f32) -> Option<f32> {
        let di = self.directions_deg.iter().position(|&d| d == wd_deg)?;
        let si = self.speeds_ms.iter().position(|&s| s == ws_ms)?;
        Some(self.values_gwh[di][si])
    }

    /// Sum over all bins (GWh/yr).
    pub fn total_gwh(&self) -> f32 {
        self.values_gwh.iter().flatten().sum()
    }

    /// Returns `true` when both tables share identical axis vectors.
    pub fn same_axes(&self, other: &Self) -> bool {
        self.directions_deg == other.directions_deg && self.speeds_ms == other.speeds_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> EnergyTable {
        let mut table = EnergyTable::new(vec![0.0, 180.0], vec![8.0, 12.0]);
        table.set(0, 0, 1.0);
        table.set(0, 1, 2.0);
        table.set(1, 0, 3.0);
        table.set(1, 1, 4.0);
        table
    }

    #[test]
    fn select_hits_exact_axis_values() {
        let table = two_by_two();
        assert_eq!(table.select(0.0, 8.0), Some(1.0));
        assert_eq!(table.select(180.0, 12.0), Some(4.0));
    }

    #[test]
    fn select_misses_off_axis_values() {
        let table = two_by_two();
        // 90° and 10 m/s are between bins; equality matching finds nothing.
        assert_eq!(table.select(90.0, 8.0), None);
        assert_eq!(table.select(0.0, 10.0), None);
    }

    #[test]
    fn total_sums_all_bins() {
        assert_eq!(two_by_two().total_gwh(), 10.0);
    }

    #[test]
    fn same_axes_detects_matching_and_mismatched_tables() {
        let a = two_by_two();
        let b = EnergyTable::new(vec![0.0, 180.0], vec![8.0, 12.0]);
        let c = EnergyTable::new(vec![0.0, 90.0], vec![8.0, 12.0]);
        assert!(a.same_axes(&b));
        assert!(!a.same_axes(&c));
    }

    #[test]
    fn new_table_is_zeroed() {
        let table = EnergyTable::new(vec![0.0], vec![5.0]);
        assert_eq!(table.get(0, 0), 0.0);
        assert_eq!(table.total_gwh(), 0.0);
    }
}
