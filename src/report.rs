//! Summary metrics derived from one regenerate pass.

use std::fmt;

use serde::Serialize;

/// Aggregate farm metrics reported after each pass.
///
/// Computed once per regeneration so the printed report, TUI panel, and API
/// snapshot all agree.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Number of turbines in the layout.
    pub turbine_count: usize,
    /// Installed capacity (MW): rated power × turbine count.
    pub capacity_mw: f32,
    /// Annual energy production with wake losses (GWh/yr).
    pub aep_gwh: f32,
    /// Total wake loss across the wind rose (percent of no-wake AEP).
    pub wake_loss_pct: f32,
    /// Local wake loss at the selected wind condition, if the selection hit
    /// the energy-table axes.
    pub local_wake_loss_pct: Option<f32>,
    /// Selected wind direction (degrees).
    pub wind_direction_deg: f32,
    /// Selected wind speed (m/s).
    pub wind_speed_ms: f32,
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Farm Summary ---")?;
        writeln!(
            f,
            "Turbines:         {} ({:.0} MW)",
            self.turbine_count, self.capacity_mw
        )?;
        writeln!(f, "AEP (with wake):  {:.2} GWh", self.aep_gwh)?;
        writeln!(f, "Total wake loss:  {:.2}%", self.wake_loss_pct)?;
        match self.local_wake_loss_pct {
            Some(pct) => write!(
                f,
                "Local wake loss:  {pct:.2}% at {:.0}° / {:.1} m/s",
                self.wind_direction_deg, self.wind_speed_ms
            ),
            None => write!(
                f,
                "Local wake loss:  n/a ({:.0}° / {:.1} m/s not on the site axes)",
                self.wind_direction_deg, self.wind_speed_ms
            ),
        }
    }
}
