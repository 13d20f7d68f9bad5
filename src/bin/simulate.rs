//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 100 runs of 4 simulated hours
//!   cargo run --bin simulate -- -n 10 -t 3600    # 10 runs of 1 hour
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use menagerie::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("MENAGERIE BALANCE SIMULATOR");
    println!();
    println!("Configuration:");
    println!("  Runs:            {}", config.num_runs);
    println!("  Seconds per run: {}", config.seconds_per_run);
    println!("  Feed each tick:  {}", config.feed_each_tick);
    println!("  Buy upgrades:    {}", config.buy_upgrades);
    if let Some(seed) = config.seed {
        println!("  Seed:            {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-t" | "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds_per_run = args[i + 1].parse().unwrap_or(4 * 60 * 60);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--no-feed" => {
                config.feed_each_tick = false;
            }
            "--no-upgrades" => {
                config.buy_upgrades = false;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Menagerie Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of simulation runs (default: 100)");
    println!("    -t, --seconds <T>    Simulated seconds per run (default: 14400)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    --no-feed            Idle only: no feeding");
    println!("    --no-upgrades        Never buy upgrades");
    println!("    -h, --help           Show this help");
}
