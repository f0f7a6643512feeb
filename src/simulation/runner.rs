//! Headless simulation runner

use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

use crate::app_builder::HeadlessAppBuilder;
use crate::ball::{Ball, PitStats};
use crate::settings::PitConfig;

use super::config::SimConfig;
use super::metrics::SimReport;

/// Run one seeded population for `frames` fixed ticks and report on it
pub fn run_pit(pit: &PitConfig, seed: u64, frames: u64) -> SimReport {
    let mut app = HeadlessAppBuilder::new()
        .with_config(pit.clone())
        .with_seed(seed)
        .build();

    // Startup: spawn the population
    app.update();

    let mut balls = app.world_mut().query::<(Entity, &Ball)>();
    let initial_speeds: HashMap<Entity, f32> = balls
        .iter(app.world())
        .map(|(entity, ball)| (entity, ball.speed()))
        .collect();

    let mut report = SimReport::new(seed, initial_speeds.len(), pit.viewport());

    for _ in 0..frames {
        app.world_mut().run_schedule(FixedUpdate);
        for (entity, ball) in balls.iter(app.world()) {
            let initial = initial_speeds.get(&entity).copied().unwrap_or(0.0);
            report.observe(ball, initial);
        }
    }

    let stats = app.world().resource::<PitStats>();
    report.frames = stats.frames;
    report.reflections_x = stats.reflections_x;
    report.reflections_y = stats.reflections_y;
    report
}

/// Run every configured seed; returns the reports in run order
pub fn run_simulation(config: &SimConfig) -> Vec<SimReport> {
    let base_seed = config.pit.seed.unwrap_or_else(|| rand::thread_rng().r#gen());

    if !config.quiet {
        println!(
            "Running {} run(s) of {} frames with {} balls (base seed: {})",
            config.runs, config.frames, config.pit.ball_count, base_seed
        );
    }

    let mut reports = Vec::with_capacity(config.runs as usize);
    for i in 0..config.runs {
        if !config.quiet && config.runs > 1 {
            print!("\rRun {}/{}...", i + 1, config.runs);
            use std::io::Write;
            std::io::stdout().flush().ok();
        }

        let seed = base_seed.wrapping_add(i as u64);
        reports.push(run_pit(&config.pit, seed, config.frames));
    }

    if !config.quiet && config.runs > 1 {
        println!("\rCompleted {} runs.", config.runs);
    }

    reports
}

/// JSON document written by `--json`: the run configuration plus every report
#[derive(Serialize)]
struct RunOutput<'a> {
    config: &'a SimConfig,
    reports: &'a [SimReport],
}

pub fn reports_json(reports: &[SimReport], config: &SimConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RunOutput { config, reports })
}

/// Print reports in the configured format
pub fn output_reports(reports: &[SimReport], config: &SimConfig) {
    if config.json {
        match reports_json(reports, config) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize reports: {}", e),
        }
        return;
    }

    for report in reports {
        report.print_summary();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_pit_holds_invariants() {
        let pit = PitConfig {
            ball_count: 200,
            ..default()
        };
        let report = run_pit(&pit, 21, 300);

        assert_eq!(report.frames, 300);
        assert_eq!(report.ball_count, 200);
        assert!(report.passed(), "{:?}", report);
        assert!(report.reflections_x > 0);
        assert!(report.reflections_y > 0);
        // Overshoot never exceeds one frame at max speed
        assert!(report.max_horizontal_overshoot <= pit.max_speed + 1e-3);
    }

    #[test]
    fn test_runs_use_consecutive_seeds() {
        let config = SimConfig {
            pit: PitConfig {
                ball_count: 5,
                seed: Some(100),
                ..default()
            },
            frames: 10,
            runs: 3,
            quiet: true,
            ..default()
        };
        let reports = run_simulation(&config);

        let seeds: Vec<u64> = reports.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![100, 101, 102]);
    }

    #[test]
    fn test_report_serializes() {
        let pit = PitConfig {
            ball_count: 3,
            ..default()
        };
        let report = run_pit(&pit, 1, 5);
        let json = serde_json::to_string(&report).unwrap();
        let back: SimReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 1);
        assert_eq!(back.frames, 5);
    }

    #[test]
    fn test_json_output_carries_config() {
        let config = SimConfig {
            pit: PitConfig {
                ball_count: 4,
                seed: Some(8),
                ..default()
            },
            frames: 3,
            quiet: true,
            json: true,
            ..default()
        };
        let reports = run_simulation(&config);
        let json = reports_json(&reports, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config"]["frames"], 3);
        assert_eq!(value["config"]["pit"]["ball_count"], 4);
        assert_eq!(value["config"]["pit"]["seed"], 8);
        assert_eq!(value["reports"][0]["seed"], 8);
        assert_eq!(value["reports"].as_array().map(|r| r.len()), Some(1));
    }
}
