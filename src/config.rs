//! TOML-based farm configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level layout configuration parsed from TOML.
///
/// All fields have defaults matching the baseline preset. Load from
/// TOML with [`LayoutConfig::from_toml_file`] or use
/// [`LayoutConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Farm geometry: grid spacing, orientation, mooring and boundary limits.
    #[serde(default)]
    pub farm: FarmConfig,
    /// Turbine rotor and power-curve parameters.
    #[serde(default)]
    pub turbine: TurbineConfig,
    /// Wind resource description for the site.
    #[serde(default)]
    pub site: SiteConfig,
}

/// Farm geometry: grid spacing, orientation, mooring and boundary limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FarmConfig {
    /// Column spacing along the farm x axis, in rotor diameters.
    pub dspacing_x: f32,
    /// Row spacing along the farm y axis, in rotor diameters.
    pub dspacing_y: f32,
    /// Number of grid rows (must be > 0).
    pub rows: usize,
    /// Number of grid columns (must be > 0).
    pub columns: usize,
    /// Farm orientation, degrees counterclockwise from east.
    pub orientation_deg: f32,
    /// Row shear as a fraction of the column spacing (0.0 = rectangular grid).
    pub skew_factor: f32,
    /// Mooring line spread radius (m): distance from turbine to each anchor.
    pub mooring_spread_radius_m: f32,
    /// Turbine-boundary clearance (m) added around the nominal grid extent.
    pub boundary_limit_m: f32,
    /// Mooring heading pattern: `"uniform"` or `"staggered"`.
    pub mooring_pattern: String,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            dspacing_x: 7.0,
            dspacing_y: 7.0,
            rows: 4,
            columns: 4,
            orientation_deg: 0.0,
            skew_factor: 0.0,
            mooring_spread_radius_m: 600.0,
            boundary_limit_m: 240.0,
            mooring_pattern: "uniform".to_string(),
        }
    }
}

/// Turbine rotor and power-curve parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurbineConfig {
    /// Rotor diameter (m).
    pub diameter_m: f32,
    /// Hub height above sea level (m).
    pub hub_height_m: f32,
    /// Rated electrical power (MW).
    pub rated_mw: f32,
    /// Cut-in wind speed (m/s).
    pub cut_in_ms: f32,
    /// Rated wind speed (m/s).
    pub rated_ms: f32,
    /// Cut-out wind speed (m/s).
    pub cut_out_ms: f32,
    /// Thrust coefficient used by the wake deficit model.
    pub thrust_coefficient: f32,
}

impl Default for TurbineConfig {
    fn default() -> Self {
        // IEA 15 MW reference turbine on the VolturnUS-S platform.
        Self {
            diameter_m: 240.0,
            hub_height_m: 150.0,
            rated_mw: 15.0,
            cut_in_ms: 3.0,
            rated_ms: 11.0,
            cut_out_ms: 25.0,
            thrust_coefficient: 0.8,
        }
    }
}

/// Wind resource description for the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Wind direction bin width (degrees).
    pub direction_step_deg: f32,
    /// Lowest wind speed bin (m/s).
    pub speed_min_ms: f32,
    /// Highest wind speed bin (m/s, inclusive).
    pub speed_max_ms: f32,
    /// Wind speed bin width (m/s).
    pub speed_step_ms: f32,
    /// Most frequent wind direction (degrees).
    pub prevailing_direction_deg: f32,
    /// Weibull scale parameter for the speed distribution (m/s).
    pub weibull_scale_ms: f32,
    /// Weibull shape parameter for the speed distribution.
    pub weibull_shape: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            direction_step_deg: 30.0,
            speed_min_ms: 3.0,
            speed_max_ms: 25.0,
            speed_step_ms: 2.0,
            prevailing_direction_deg: 270.0,
            weibull_scale_ms: 10.0,
            weibull_shape: 2.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"farm.dspacing_x"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl LayoutConfig {
    /// Returns the baseline farm: 4×4 grid of 15 MW turbines at 7D spacing.
    pub fn baseline() -> Self {
        Self {
            farm: FarmConfig::default(),
            turbine: TurbineConfig::default(),
            site: SiteConfig::default(),
        }
    }

    /// Returns the dense preset: tighter 5D spacing on a 5×5 grid with
    /// staggered mooring headings.
    pub fn dense() -> Self {
        Self {
            farm: FarmConfig {
                dspacing_x: 5.0,
                dspacing_y: 5.0,
                rows: 5,
                columns: 5,
                mooring_spread_radius_m: 480.0,
                mooring_pattern: "staggered".to_string(),
                ..FarmConfig::default()
            },
            turbine: TurbineConfig::default(),
            site: SiteConfig::default(),
        }
    }

    /// Returns the sparse-site preset: 9D spacing, 3×3 grid, finer wind rose.
    pub fn sparse_site() -> Self {
        Self {
            farm: FarmConfig {
                dspacing_x: 9.0,
                dspacing_y: 9.0,
                rows: 3,
                columns: 3,
                boundary_limit_m: 480.0,
                ..FarmConfig::default()
            },
            turbine: TurbineConfig::default(),
            site: SiteConfig {
                direction_step_deg: 15.0,
                speed_step_ms: 1.0,
                ..SiteConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "dense", "sparse_site"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "dense" => Ok(Self::dense()),
            "sparse_site" => Ok(Self::sparse_site()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let f = &self.farm;

        if f.dspacing_x <= 0.0 {
            errors.push(ConfigError {
                field: "farm.dspacing_x".into(),
                message: "must be > 0".into(),
            });
        }
        if f.dspacing_y <= 0.0 {
            errors.push(ConfigError {
                field: "farm.dspacing_y".into(),
                message: "must be > 0".into(),
            });
        }
        if f.rows == 0 {
            errors.push(ConfigError {
                field: "farm.rows".into(),
                message: "must be > 0".into(),
            });
        }
        if f.columns == 0 {
            errors.push(ConfigError {
                field: "farm.columns".into(),
                message: "must be > 0".into(),
            });
        }
        if f.mooring_spread_radius_m <= 0.0 {
            errors.push(ConfigError {
                field: "farm.mooring_spread_radius_m".into(),
                message: "must be > 0".into(),
            });
        }
        if f.boundary_limit_m < 0.0 {
            errors.push(ConfigError {
                field: "farm.boundary_limit_m".into(),
                message: "must be >= 0".into(),
            });
        }
        if f.mooring_pattern != "uniform" && f.mooring_pattern != "staggered" {
            errors.push(ConfigError {
                field: "farm.mooring_pattern".into(),
                message: format!(
                    "must be \"uniform\" or \"staggered\", got \"{}\"",
                    f.mooring_pattern
                ),
            });
        }

        let t = &self.turbine;
        if t.diameter_m <= 0.0 {
            errors.push(ConfigError {
                field: "turbine.diameter_m".into(),
                message: "must be > 0".into(),
            });
        }
        if t.rated_mw <= 0.0 {
            errors.push(ConfigError {
                field: "turbine.rated_mw".into(),
                message: "must be > 0".into(),
            });
        }
        if t.cut_in_ms >= t.rated_ms {
            errors.push(ConfigError {
                field: "turbine.cut_in_ms".into(),
                message: "must be < turbine.rated_ms".into(),
            });
        }
        if t.rated_ms >= t.cut_out_ms {
            errors.push(ConfigError {
                field: "turbine.rated_ms".into(),
                message: "must be < turbine.cut_out_ms".into(),
            });
        }
        if !(0.0..1.0).contains(&t.thrust_coefficient) {
            errors.push(ConfigError {
                field: "turbine.thrust_coefficient".into(),
                message: "must be in [0.0, 1.0)".into(),
            });
        }

        let s = &self.site;
        if s.direction_step_deg <= 0.0 || s.direction_step_deg > 360.0 {
            errors.push(ConfigError {
                field: "site.direction_step_deg".into(),
                message: "must be in (0, 360]".into(),
            });
        }
        if s.speed_min_ms >= s.speed_max_ms {
            errors.push(ConfigError {
                field: "site.speed_min_ms".into(),
                message: "must be < site.speed_max_ms".into(),
            });
        }
        if s.speed_step_ms <= 0.0 {
            errors.push(ConfigError {
                field: "site.speed_step_ms".into(),
                message: "must be > 0".into(),
            });
        }
        if s.weibull_scale_ms <= 0.0 {
            errors.push(ConfigError {
                field: "site.weibull_scale_ms".into(),
                message: "must be > 0".into(),
            });
        }
        if s.weibull_shape <= 0.0 {
            errors.push(ConfigError {
                field: "site.weibull_shape".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}
