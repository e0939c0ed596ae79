//! Layout explorer entry point — CLI wiring and config-driven pass execution.

use std::path::Path;
use std::process;

use wakeview::config::LayoutConfig;
use wakeview::io::export::export_csv;
use wakeview::pass::{self, Adjustments};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    wind_direction: Option<f32>,
    wind_speed: Option<f32>,
    layout_out: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("wakeview — Offshore wind-farm layout and wake-loss explorer");
    eprintln!();
    eprintln!("Usage: wakeview [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load farm configuration from TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline)");
    eprintln!("  --wd <degrees>           Selected wind direction for the local wake loss");
    eprintln!("  --ws <m/s>               Selected wind speed for the local wake loss");
    eprintln!("  --layout-out <path>      Export the final turbine layout to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive terminal UI");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after the pass");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        wind_direction: None,
        wind_speed: None,
        layout_out: None,
        #[cfg(feature = "tui")]
        tui: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--wd" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --wd requires a degrees argument");
                    process::exit(1);
                }
                if let Ok(wd) = args[i].parse::<f32>() {
                    cli.wind_direction = Some(wd);
                } else {
                    eprintln!("error: --wd value \"{}\" is not a valid number", args[i]);
                    process::exit(1);
                }
            }
            "--ws" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --ws requires an m/s argument");
                    process::exit(1);
                }
                if let Ok(ws) = args[i].parse::<f32>() {
                    cli.wind_speed = Some(ws);
                } else {
                    eprintln!("error: --ws value \"{}\" is not a valid number", args[i]);
                    process::exit(1);
                }
            }
            "--layout-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --layout-out requires a path argument");
                    process::exit(1);
                }
                cli.layout_out = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then baseline
    let config = if let Some(ref path) = cli.config_path {
        match LayoutConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match LayoutConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        LayoutConfig::baseline()
    };

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        wakeview::tui::run(&config);
        return;
    }

    // Build adjustments and apply wind-selection overrides
    let mut adjustments = Adjustments::from_config(&config);
    if let Some(wd) = cli.wind_direction {
        adjustments.wind_direction_deg = wd;
    }
    if let Some(ws) = cli.wind_speed {
        adjustments.wind_speed_ms = ws;
    }

    // Run one pass
    let result = pass::regenerate(&config, &adjustments);

    // Print per-turbine records
    for (index, turbine) in result.turbines.iter().enumerate() {
        println!("#{index:>3} {turbine}");
    }

    // Print summary report
    println!("\n{}", result.summary);

    // Export CSV if requested
    if let Some(ref path) = cli.layout_out {
        if let Err(e) = export_csv(&result.turbines, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Layout written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(wakeview::api::AppState {
            config: result.config,
            adjustments,
            turbines: result.turbines,
            summary: result.summary,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(wakeview::api::serve(state, addr));
    }
}
