//! Solar simulator entry point — CLI wiring and config-driven calculation.

use std::path::Path;
use std::process;

use solar_sim::config::ScenarioConfig;
use solar_sim::io::export::export_csv;
use solar_sim::session::Session;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    consumption_override: Option<f64>,
    report_out: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("solar-sim — Residential solar sizing simulator");
    eprintln!();
    eprintln!("Usage: solar-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (bill_based)");
    eprintln!("  --consumption <kwh>      Override the monthly consumption figure");
    eprintln!("  --report-out <path>      Export the monthly series to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive form");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after simulation");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the bill_based preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        consumption_override: None,
        report_out: None,
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
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--consumption" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --consumption requires a kWh argument");
                    process::exit(1);
                }
                if let Ok(kwh) = args[i].parse::<f64>() {
                    cli.consumption_override = Some(kwh);
                } else {
                    eprintln!(
                        "error: --consumption value \"{}\" is not a valid number",
                        args[i]
                    );
                    process::exit(1);
                }
            }
            "--report-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --report-out requires a path argument");
                    process::exit(1);
                }
                cli.report_out = Some(args[i].clone());
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

    // Load config: --scenario takes priority, then --preset, then baseline
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Apply consumption override
    if let Some(kwh) = cli.consumption_override {
        scenario.demand.monthly_consumption_kwh = Some(kwh);
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Interactive form takes over the terminal; everything else is skipped
    #[cfg(feature = "tui")]
    if cli.tui {
        solar_sim::tui::run(scenario);
        return;
    }

    // Commit one simulation and print the report
    let mut session = Session::new(scenario);
    let report = session.simulate().clone();
    println!("{report}");

    // Export CSV if requested
    if let Some(ref path) = cli.report_out {
        if let Err(e) = export_csv(&report, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Monthly series written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(solar_sim::api::AppState { report });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(solar_sim::api::serve(state, addr));
    }
}
