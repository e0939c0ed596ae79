//! Integration tests covering the built-in presets end to end.

use wakeview::config::LayoutConfig;
use wakeview::pass::{self, Adjustments};

#[test]
fn every_preset_runs_a_complete_pass() {
    for name in LayoutConfig::PRESETS {
        let config = LayoutConfig::from_preset(name).expect("preset should load");
        assert!(config.validate().is_empty(), "preset \"{name}\" should validate");

        let adjustments = Adjustments::from_config(&config);
        let result = pass::regenerate(&config, &adjustments);

        assert_eq!(
            result.turbines.len(),
            config.farm.rows * config.farm.columns,
            "preset \"{name}\" turbine count"
        );
        assert!(
            result.summary.aep_gwh > 0.0,
            "preset \"{name}\" should produce energy"
        );
        assert!(
            result.summary.local_wake_loss_pct.is_some(),
            "preset \"{name}\" default wind selection should hit the axes"
        );
    }
}

#[test]
fn dense_preset_staggers_mooring_headings() {
    let config = LayoutConfig::from_preset("dense").expect("preset should load");
    let adjustments = Adjustments::from_config(&config);
    let result = pass::regenerate(&config, &adjustments);

    let headings: Vec<f32> = result.turbines.iter().map(|t| t.mori_deg).collect();
    let first_row = headings[0];
    let second_row = headings[config.farm.columns];
    assert_ne!(first_row, second_row);
}

#[test]
fn toml_round_trip_matches_preset() {
    // A TOML document spelling out the baseline values must behave exactly
    // like the built-in preset.
    let toml = r#"
[farm]
dspacing_x = 7.0
dspacing_y = 7.0
rows = 4
columns = 4
orientation_deg = 0.0
skew_factor = 0.0
mooring_spread_radius_m = 600.0
boundary_limit_m = 240.0
mooring_pattern = "uniform"
"#;
    let from_toml = LayoutConfig::from_toml_str(toml).expect("TOML should parse");
    let preset = LayoutConfig::baseline();

    let a = pass::regenerate(&from_toml, &Adjustments::from_config(&from_toml));
    let b = pass::regenerate(&preset, &Adjustments::from_config(&preset));

    assert_eq!(a.turbines, b.turbines);
    assert_eq!(a.summary.aep_gwh, b.summary.aep_gwh);
}
