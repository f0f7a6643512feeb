//! Simulation configuration

use serde::Serialize;

use crate::settings::PitConfig;

/// Configuration for a headless simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimConfig {
    /// Population and viewport
    pub pit: PitConfig,
    /// Fixed ticks to simulate per run
    pub frames: u64,
    /// Independent runs; run N uses seed + N
    pub runs: u32,
    /// Print reports as JSON instead of a summary
    pub json: bool,
    /// Suppress progress output
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            pit: PitConfig::default(),
            frames: 600, // 10 seconds at 60 FPS
            runs: 1,
            json: false,
            quiet: false,
        }
    }
}

pub const USAGE: &str = "\
Usage: simulate [options]

Options:
  --frames <n>    Fixed ticks per run (default 600)
  --runs <n>      Number of runs, seeds increase by one per run (default 1)
  --seed <n>      Base RNG seed (default random)
  --balls <n>     Population size (default 2500)
  --width <px>    Viewport width (default 800)
  --height <px>   Viewport height (default 450)
  --json          Print reports as JSON
  --quiet         Suppress progress output
  --help          Show this message";

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

impl SimConfig {
    /// Parse configuration from command line arguments
    pub fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse(&args[1..])
    }

    /// Parse configuration from an argument list (program name excluded)
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut config = Self::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--frames" => {
                    config.frames = parse_value(flag, args.get(i + 1))?;
                    i += 1;
                }
                "--runs" => {
                    config.runs = parse_value(flag, args.get(i + 1))?;
                    i += 1;
                }
                "--seed" => {
                    config.pit.seed = Some(parse_value(flag, args.get(i + 1))?);
                    i += 1;
                }
                "--balls" => {
                    config.pit.ball_count = parse_value(flag, args.get(i + 1))?;
                    i += 1;
                }
                "--width" => {
                    config.pit.width = parse_value(flag, args.get(i + 1))?;
                    i += 1;
                }
                "--height" => {
                    config.pit.height = parse_value(flag, args.get(i + 1))?;
                    i += 1;
                }
                "--json" => config.json = true,
                "--quiet" | "-q" => config.quiet = true,
                "--help" | "-h" => return Err(USAGE.to_string()),
                other => return Err(format!("Unknown argument: {}\n\n{}", other, USAGE)),
            }
            i += 1;
        }

        if config.runs == 0 {
            return Err("--runs must be at least 1".to_string());
        }
        config.pit.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let config = SimConfig::parse(&[]).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_parse_overrides() {
        let config = SimConfig::parse(&args(&[
            "--frames", "120", "--seed", "5", "--balls", "10", "--width", "640", "--height",
            "480", "--runs", "3", "--json", "--quiet",
        ]))
        .unwrap();

        assert_eq!(config.frames, 120);
        assert_eq!(config.runs, 3);
        assert_eq!(config.pit.seed, Some(5));
        assert_eq!(config.pit.ball_count, 10);
        assert_eq!(config.pit.width, 640);
        assert_eq!(config.pit.height, 480);
        assert!(config.json);
        assert!(config.quiet);
    }

    #[test]
    fn test_parse_errors() {
        assert!(SimConfig::parse(&args(&["--frames"])).is_err());
        assert!(SimConfig::parse(&args(&["--frames", "many"])).is_err());
        assert!(SimConfig::parse(&args(&["--bogus"])).is_err());
        assert!(SimConfig::parse(&args(&["--runs", "0"])).is_err());
        assert!(SimConfig::parse(&args(&["--height", "10"])).is_err());
        assert!(SimConfig::parse(&args(&["--width", "3000000000"])).is_err());
    }
}
