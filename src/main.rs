// Elevator Dispatch Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/elevator-sim
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/elevator-sim --floor-count 20 --elevator-count 4 --target-people 200 --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use elevator_dispatch_simulator::simulation::{
    LoggingConfig, RunReport, SimulationEngine, SimulationRunner,
};
use elevator_dispatch_simulator::types::{CliArgs, SimulationConfig};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: warnings only
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    info!("Starting Elevator Dispatch Simulator");

    let config = SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    let engine = SimulationEngine::new(config.clone()).context("Failed to create simulation engine")?;
    let mut runner = SimulationRunner::new(engine);
    let report = if args.lockstep {
        runner.run_lockstep(config.max_simulated_seconds)
    } else {
        runner.run()
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    info!("Elevator Dispatch Simulator completed");
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Elevator Dispatch Simulator");
    eprintln!("===========================");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Floors: {}", config.floor_count);
    eprintln!("  Elevators: {}", config.elevator_count);
    eprintln!("  Capacity: {}", config.capacity);
    eprintln!(
        "  Timing (floor / pickup / batch): {}s / {}s / {}s",
        config.seconds_per_floor, config.seconds_per_pickup, config.seconds_per_passenger_batch
    );
    eprintln!("  People per Batch: {}", config.people_per_batch);
    eprintln!("  Target People: {}", config.target_people);
    eprintln!("  Max Simulated Seconds: {}", config.max_simulated_seconds);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

fn print_report(report: &RunReport) {
    if report.completed {
        println!("Run {} completed in {} simulated seconds", report.run_id, report.simulated_seconds);
    } else {
        println!(
            "Run {} stopped at the safety bound after {} simulated seconds",
            report.run_id, report.simulated_seconds
        );
    }
    println!();
    print!("{}", report.statistics);
}
