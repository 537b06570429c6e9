//! Command-line front end

pub mod args;

use std::sync::Arc;
use std::time::Duration;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::io::OutputWriter;
use crate::models::errors::NavResult;
use crate::models::galaxy::GalaxyGraph;
use crate::models::hazards::{scatter_storms, Hazards};
use crate::models::route::{JumpPlan, Route};
use crate::models::sector::Sector;
use crate::navigator::{Navigator, NavigatorOptions};
use crate::ui::presenters::{MapPresenter, RoutePresenter};

use args::Args;

/// Plan the itinerary described by `args` and print it.
///
/// # Returns
///
/// * `Ok(true)` if a route was found
/// * `Ok(false)` if there is no route
/// * `Err` for bad input: unreadable galaxy file, unknown systems,
///   malformed sectors
pub fn run(args: &Args, output: &mut dyn OutputWriter) -> NavResult<bool> {
    let galaxy = match &args.galaxy {
        Some(path) => GalaxyGraph::load(path)?,
        None => GalaxyGraph::vendetta()?,
    };
    let options = NavigatorOptions {
        timeout: args.timeout_ms.map(Duration::from_millis),
    };
    let navigator = Navigator::with_options(Arc::new(galaxy), options);

    let stops = parse_sectors(&navigator, &args.stops)?;
    let hazards = build_hazards(&navigator, args)?;

    let route = match navigator.navigate(&stops, &hazards) {
        Ok(route) => route,
        Err(reason) => {
            RoutePresenter::show_no_route(&reason, output);
            return Ok(false);
        }
    };

    let flown = flown_systems(&stops, &route);
    if flown.len() > 1 {
        RoutePresenter::show_jump_plan(&flown, output);
    }
    RoutePresenter::show_route(&route, args.ids, output);

    if args.draw {
        for system in route.systems() {
            output.writeln("");
            MapPresenter::draw_system(navigator.galaxy(), system, &route, &hazards, output);
        }
    }
    Ok(true)
}

/// Systems visited in flight order, starting from the first stop.
fn flown_systems(stops: &[Sector], route: &Route) -> JumpPlan {
    let mut plan = JumpPlan::new();
    for system in stops.first().map(Sector::system).into_iter().chain(route.systems()) {
        if plan.last() != Some(system) {
            plan.push(system.clone());
        }
    }
    plan
}

fn parse_sectors(navigator: &Navigator, texts: &[String]) -> NavResult<Vec<Sector>> {
    texts
        .iter()
        .map(|text| navigator.parse_sector(text))
        .collect()
}

fn build_hazards(navigator: &Navigator, args: &Args) -> NavResult<Hazards> {
    let mut hazards = Hazards::with_strategy(args.strategy);
    for storm in parse_sectors(navigator, &args.storms)? {
        hazards.add_avoidance(storm);
    }
    for obstacle in parse_sectors(navigator, &args.obstacles)? {
        hazards.add_obstacle(obstacle);
    }

    if args.random_storms > 0 {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let storms = scatter_storms(navigator.galaxy(), &mut rng, args.random_storms);
        info!("scattered {} random storms", storms.len());
        for storm in storms {
            hazards.add_avoidance(storm);
        }
    }
    Ok(hazards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::errors::NavError;
    use clap::Parser;

    fn run_with(argv: &[&str]) -> (NavResult<bool>, MockOutput) {
        let args = Args::try_parse_from(std::iter::once("starnav").chain(argv.iter().copied())).unwrap();
        let mut output = MockOutput::new();
        let result = run(&args, &mut output);
        (result, output)
    }

    #[test]
    fn prints_route_between_adjacent_systems() {
        let (result, output) = run_with(&["dau F-11", "arta I-8"]);
        assert!(result.unwrap());
        assert_eq!(
            output.lines(),
            vec![
                "JUMPS: dau -> arta",
                "  1. dau B-9",
                "  2. arta O-12",
                "  3. arta I-8",
                "3 WAYPOINTS, 1 JUMPS",
            ]
        );
    }

    #[test]
    fn jump_line_follows_the_flown_route() {
        let (result, output) = run_with(&["dau F-11", "arta I-8", "ukari D-13"]);
        assert!(result.unwrap());
        let lines = output.lines();
        assert_eq!(lines[0], "JUMPS: dau -> arta -> ukari");
        assert_eq!(lines.iter().filter(|line| line.starts_with("JUMPS")).count(), 1);
        assert_eq!(lines.last().map(String::as_str), Some("6 WAYPOINTS, 2 JUMPS"));
    }

    #[test]
    fn same_system_trip_prints_no_jump_line() {
        let (result, output) = run_with(&["dau A-1", "dau P-16"]);
        assert!(result.unwrap());
        assert!(output.lines().iter().all(|line| !line.starts_with("JUMPS")));
    }

    #[test]
    fn storm_wall_reports_no_route() {
        let mut argv = vec!["dau F-11", "arta I-8"];
        let storms: Vec<String> = ('A'..='P').map(|c| format!("dau {c}-10")).collect();
        for storm in &storms {
            argv.push("--storm");
            argv.push(storm);
        }
        let (result, output) = run_with(&argv);
        assert!(!result.unwrap());
        assert_eq!(output.lines()[0], "NO POSSIBLE ROUTE FOUND");
    }

    #[test]
    fn unknown_system_is_an_error() {
        let (result, _) = run_with(&["vulcan A-1", "dau B-9"]);
        assert!(matches!(result, Err(NavError::UnknownSystem(_))));
    }

    #[test]
    fn draw_adds_a_map_per_system() {
        let (result, output) = run_with(&["dau F-11", "arta I-8", "--draw"]);
        assert!(result.unwrap());
        let lines = output.lines();
        assert!(lines.contains(&"DAU".to_string()));
        assert!(lines.contains(&"ARTA CAELESTIS".to_string()));
    }

    #[test]
    fn seeded_random_storms_are_reproducible() {
        let argv = ["dau F-11", "ukari I-8", "--random-storms", "200", "--seed", "11"];
        let (first, first_output) = run_with(&argv);
        let (second, second_output) = run_with(&argv);
        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(first_output.text(), second_output.text());
    }
}
