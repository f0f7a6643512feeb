//! Scenario runner CLI
//!
//! Usage:
//!   cargo run --bin test-scenarios                  # Run all scenarios
//!   cargo run --bin test-scenarios -- walls/        # Run category
//!   cargo run --bin test-scenarios -- walls/bottom  # Run single scenario
//!   cargo run --bin test-scenarios -- --verbose     # Show details on failure

use std::fs;
use std::path::{Path, PathBuf};

use ballpit::testing::{SCENARIOS_DIR, TestResult, parser::parse_test_file, run_test};

#[derive(Default)]
struct Tally {
    passed: usize,
    failed: usize,
    errors: usize,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let filter = args.iter().find(|a| !a.starts_with('-')).cloned();

    let root = Path::new(SCENARIOS_DIR);
    if !root.is_dir() {
        eprintln!("No scenarios directory at {}", SCENARIOS_DIR);
        std::process::exit(1);
    }

    let mut scenarios = Vec::new();
    collect_scenarios(root, &mut scenarios);
    scenarios.sort();
    if let Some(f) = &filter {
        scenarios.retain(|path| relative(root, path).contains(f.as_str()));
    }

    if scenarios.is_empty() {
        eprintln!(
            "No scenarios found{}",
            filter.map(|f| format!(" matching '{}'", f)).unwrap_or_default()
        );
        std::process::exit(1);
    }

    println!("Running {} scenario(s) from {}\n", scenarios.len(), SCENARIOS_DIR);

    let mut tally = Tally::default();
    for path in &scenarios {
        let label = relative(root, path);
        let result = match parse_test_file(path) {
            Ok(def) => {
                if verbose {
                    if let Some(description) = &def.description {
                        println!("  # {}: {}", def.name, description);
                    }
                }
                run_test(&def)
            }
            Err(message) => TestResult::Error { message },
        };
        report(&label, &result, verbose, &mut tally);
    }

    println!(
        "\n{} passed, {} failed, {} errors",
        tally.passed, tally.failed, tally.errors
    );
    if tally.failed + tally.errors > 0 {
        std::process::exit(1);
    }
}

/// Recursively gather `.toml` files
fn collect_scenarios(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect_scenarios(&path, out);
        } else if path.extension().is_some_and(|e| e == "toml") {
            out.push(path);
        }
    }
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .with_extension("")
        .to_string_lossy()
        .into_owned()
}

fn report(label: &str, result: &TestResult, verbose: bool, tally: &mut Tally) {
    match result {
        TestResult::Pass { frames } => {
            tally.passed += 1;
            println!("  PASS  {:<40} ({} frames)", label, frames);
        }
        TestResult::Fail { error } => {
            tally.failed += 1;
            println!("  FAIL  {}", label);
            if verbose {
                println!("        {}", error);
            } else {
                println!("        {}", error.message);
            }
        }
        TestResult::Error { message } => {
            tally.errors += 1;
            println!("  ERROR {}", label);
            println!("        {}", message);
        }
    }
}
