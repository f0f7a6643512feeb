//! Headless simulation tool - run the ball pit without rendering
//!
//! Usage:
//!   cargo run --bin simulate -- --help
//!   cargo run --bin simulate -- --frames 3600 --seed 7
//!   cargo run --bin simulate -- --runs 10 --balls 500 --json

use ballpit::simulation::{SimConfig, output_reports, run_simulation};

fn main() {
    let config = match SimConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let reports = run_simulation(&config);
    output_reports(&reports, &config);

    if reports.iter().any(|r| !r.passed()) {
        std::process::exit(1);
    }
}
