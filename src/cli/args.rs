use std::path::PathBuf;

use clap::Parser;

use crate::models::hazards::Strategy;

/// Plan a route through one or more sectors.
///
/// Sectors are written in game notation: `"dau B-9"` or `dau:B-9`.
#[derive(Parser, Debug)]
#[command(name = "starnav", author, version, about, long_about = None)]
pub struct Args {
    /// Stops to visit in order, starting with the current sector
    #[arg(required = true, num_args = 1..)]
    pub stops: Vec<String>,

    /// Galaxy content file (TOML); the built-in galaxy is used otherwise
    #[arg(short, long)]
    pub galaxy: Option<PathBuf>,

    /// Sector with a storm to fly around (repeatable)
    #[arg(long = "storm")]
    pub storms: Vec<String>,

    /// Sector with a permanent obstacle (repeatable)
    #[arg(long = "obstacle")]
    pub obstacles: Vec<String>,

    /// How obstacles are treated: safe or fast
    #[arg(long, default_value = "safe")]
    pub strategy: Strategy,

    /// Scatter this many random storms across the galaxy
    #[arg(long, default_value = "0")]
    pub random_storms: usize,

    /// Seed for --random-storms
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Give up planning after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print legacy numeric sector ids
    #[arg(long)]
    pub ids: bool,

    /// Draw an ASCII map of every system on the route
    #[arg(long)]
    pub draw: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stops_and_repeatable_hazards() {
        let args = Args::try_parse_from([
            "starnav",
            "dau B-9",
            "arta:H-8",
            "--storm",
            "dau C-10",
            "--storm",
            "dau D-10",
            "--obstacle",
            "arta A-1",
            "--strategy",
            "fast",
            "--ids",
        ])
        .unwrap();

        assert_eq!(args.stops, vec!["dau B-9", "arta:H-8"]);
        assert_eq!(args.storms.len(), 2);
        assert_eq!(args.obstacles, vec!["arta A-1"]);
        assert_eq!(args.strategy, Strategy::Fast);
        assert!(args.ids);
        assert!(!args.draw);
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["starnav", "dau B-9"]).unwrap();
        assert_eq!(args.strategy, Strategy::Safe);
        assert_eq!(args.random_storms, 0);
        assert_eq!(args.seed, None);
        assert_eq!(args.timeout_ms, None);
        assert!(args.galaxy.is_none());
    }

    #[test]
    fn rejects_missing_stops_and_bad_strategy() {
        assert!(Args::try_parse_from(["starnav"]).is_err());
        assert!(Args::try_parse_from(["starnav", "dau B-9", "--strategy", "reckless"]).is_err());
    }
}
