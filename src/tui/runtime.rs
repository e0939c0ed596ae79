//! TUI application state and the adjustable-control table.

use crate::config::LayoutConfig;
use crate::pass::{self, Adjustments, PassResult};

/// One user-adjustable parameter exposed by the interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Column spacing Sx (rotor diameters).
    SpacingX,
    /// Row spacing Sy (rotor diameters).
    SpacingY,
    /// Farm orientation input α (degrees).
    Alpha,
    /// Skew angle β (degrees).
    Beta,
    /// Mooring heading delta Δγ (degrees).
    Gamma,
    /// Translation coefficient along x.
    DeltaX,
    /// Translation coefficient along y.
    DeltaY,
    /// Mooring line spread radius (m).
    SpreadRadius,
    /// Boundary clearance (m).
    BoundaryLimit,
    /// Selected wind direction (degrees).
    WindDirection,
    /// Selected wind speed (m/s).
    WindSpeed,
}

/// Display and selection order of the controls.
pub const CONTROLS: [Control; 11] = [
    Control::SpacingX,
    Control::SpacingY,
    Control::Alpha,
    Control::Beta,
    Control::Gamma,
    Control::DeltaX,
    Control::DeltaY,
    Control::SpreadRadius,
    Control::BoundaryLimit,
    Control::WindDirection,
    Control::WindSpeed,
];

impl Control {
    /// Short label shown in the controls panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::SpacingX => "Sx",
            Self::SpacingY => "Sy",
            Self::Alpha => "α",
            Self::Beta => "β",
            Self::Gamma => "Δγ",
            Self::DeltaX => "Δx",
            Self::DeltaY => "Δy",
            Self::SpreadRadius => "anchor r",
            Self::BoundaryLimit => "boundary",
            Self::WindDirection => "wdir",
            Self::WindSpeed => "wsp",
        }
    }
}

/// TUI application state.
///
/// Holds the immutable base configuration and the live adjustment values;
/// every edit runs one synchronous [`pass::regenerate`] and replaces the
/// pass result wholesale.
pub struct App {
    /// Base configuration the adjustments are applied to.
    base: LayoutConfig,
    /// Current adjustment values.
    pub adjustments: Adjustments,
    /// Result of the latest pass.
    pub result: PassResult,
    /// Index of the selected control in [`CONTROLS`].
    pub selected: usize,
    /// Name of the active preset (or `"custom"` for a file config).
    pub preset_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app from a loaded configuration and runs the first pass.
    pub fn new(base: LayoutConfig) -> Self {
        let adjustments = Adjustments::from_config(&base);
        let result = pass::regenerate(&base, &adjustments);
        Self {
            base,
            adjustments,
            result,
            selected: 0,
            preset_name: "custom".to_string(),
            quit: false,
        }
    }

    /// Currently selected control.
    pub fn selected_control(&self) -> Control {
        CONTROLS[self.selected]
    }

    /// Moves the selection to the next control, wrapping.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CONTROLS.len();
    }

    /// Moves the selection to the previous control, wrapping.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + CONTROLS.len() - 1) % CONTROLS.len();
    }

    /// Increases the selected control by one step and regenerates.
    pub fn increase(&mut self) {
        self.adjust(1.0);
    }

    /// Decreases the selected control by one step and regenerates.
    pub fn decrease(&mut self) {
        self.adjust(-1.0);
    }

    /// Resets all adjustments to the configuration values and regenerates.
    pub fn reset(&mut self) {
        self.adjustments = Adjustments::from_config(&self.base);
        self.regenerate();
    }

    /// Switches to a built-in preset, replacing the base configuration.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(base) = LayoutConfig::from_preset(name) else {
            return;
        };
        self.base = base;
        self.adjustments = Adjustments::from_config(&self.base);
        self.preset_name = name.to_string();
        self.regenerate();
    }

    /// Current value of a control.
    pub fn value_of(&self, control: Control) -> f32 {
        let a = &self.adjustments;
        match control {
            Control::SpacingX => a.spacing_x,
            Control::SpacingY => a.spacing_y,
            Control::Alpha => a.alpha_deg,
            Control::Beta => a.beta_deg,
            Control::Gamma => a.gamma_deg,
            Control::DeltaX => a.dx_coeff,
            Control::DeltaY => a.dy_coeff,
            Control::SpreadRadius => a.spread_radius_m,
            Control::BoundaryLimit => a.boundary_limit_m,
            Control::WindDirection => a.wind_direction_deg,
            Control::WindSpeed => a.wind_speed_ms,
        }
    }

    /// Step size for a control; the wind selectors step along the site axes
    /// so the energy-table selection always lands on a bin.
    pub fn step_of(&self, control: Control) -> f32 {
        match control {
            Control::SpacingX | Control::SpacingY => 0.1,
            Control::Alpha => 1.0,
            Control::Beta => 1.0,
            Control::Gamma => 5.0,
            Control::DeltaX | Control::DeltaY => 0.05,
            Control::SpreadRadius | Control::BoundaryLimit => 10.0,
            Control::WindDirection => self.base.site.direction_step_deg,
            Control::WindSpeed => self.base.site.speed_step_ms,
        }
    }

    /// Inclusive value range for a control.
    pub fn range_of(&self, control: Control) -> (f32, f32) {
        match control {
            Control::SpacingX | Control::SpacingY => (4.0, 12.0),
            Control::Alpha => (0.0, 360.0),
            Control::Beta => (0.0, self.adjustments.beta_max_deg()),
            Control::Gamma => (0.0, 360.0),
            Control::DeltaX | Control::DeltaY => (-1.0, 1.0),
            Control::SpreadRadius => (100.0, 2000.0),
            Control::BoundaryLimit => (0.0, 2000.0),
            Control::WindDirection => (0.0, 360.0 - self.base.site.direction_step_deg),
            Control::WindSpeed => (self.base.site.speed_min_ms, self.base.site.speed_max_ms),
        }
    }

    fn adjust(&mut self, sign: f32) {
        let control = self.selected_control();
        let step = self.step_of(control);
        let (lo, hi) = self.range_of(control);
        let value = (self.value_of(control) + sign * step).clamp(lo, hi);

        let a = &mut self.adjustments;
        match control {
            Control::SpacingX => a.spacing_x = value,
            Control::SpacingY => a.spacing_y = value,
            Control::Alpha => a.alpha_deg = value,
            Control::Beta => a.beta_deg = value,
            Control::Gamma => a.gamma_deg = value,
            Control::DeltaX => a.dx_coeff = value,
            Control::DeltaY => a.dy_coeff = value,
            Control::SpreadRadius => a.spread_radius_m = value,
            Control::BoundaryLimit => a.boundary_limit_m = value,
            Control::WindDirection => a.wind_direction_deg = value,
            Control::WindSpeed => a.wind_speed_ms = value,
        }
        self.regenerate();
    }

    /// Runs one synchronous pass with the current adjustments.
    fn regenerate(&mut self) {
        self.result = pass::regenerate(&self.base, &self.adjustments);
    }
}
