use std::collections::HashSet;

use crate::io::OutputWriter;
use crate::models::constants::{MapCell, GRID_SIZE};
use crate::models::errors::NoRoute;
use crate::models::galaxy::GalaxyGraph;
use crate::models::hazards::Hazards;
use crate::models::point::Point;
use crate::models::route::{JumpPlan, Route};
use crate::models::sector::System;
use crate::models::segment::Segment;

pub struct RoutePresenter;

impl RoutePresenter {
    /// One numbered line per waypoint, optionally with its legacy id.
    pub fn show_route(route: &Route, show_ids: bool, output: &mut dyn OutputWriter) {
        if route.is_empty() {
            output.writeln("ALREADY THERE");
            return;
        }

        for (i, sector) in route.sectors().iter().enumerate() {
            if show_ids {
                output.writeln(&format!("{:>3}. {:<12}{}", i + 1, sector.to_string(), sector.sector_id()));
            } else {
                output.writeln(&format!("{:>3}. {}", i + 1, sector));
            }
        }

        let jumps = route.systems().len().saturating_sub(1);
        output.writeln(&format!("{} WAYPOINTS, {} JUMPS", route.len(), jumps));
    }

    pub fn show_no_route(reason: &NoRoute, output: &mut dyn OutputWriter) {
        output.writeln("NO POSSIBLE ROUTE FOUND");
        output.writeln(&format!("  ({})", reason));
    }

    pub fn show_jump_plan(plan: &JumpPlan, output: &mut dyn OutputWriter) {
        let names: Vec<&str> = plan.iter().map(System::name).collect();
        output.writeln(&format!("JUMPS: {}", names.join(" -> ")));
    }
}

pub struct MapPresenter;

impl MapPresenter {
    /// ASCII grid: `*` for highlighted cells, `X` for obstacles.
    pub fn draw(
        size: i32,
        highlights: &HashSet<Point>,
        obstacles: &HashSet<Point>,
        output: &mut dyn OutputWriter,
    ) {
        output.writeln(&format!("_{}", "__".repeat(size.max(0) as usize)));
        for y in 0..size {
            output.write("|");
            for x in 0..size {
                let point = Point::new(x, y);
                let cell = if highlights.contains(&point) {
                    MapCell::Route
                } else if obstacles.contains(&point) {
                    MapCell::Obstacle
                } else {
                    MapCell::Empty
                };
                output.write(cell.symbol());
            }
            output.writeln("");
        }
        output.writeln("");
    }

    /// Map of one system with the cells the route flies through and every
    /// hazard reported there.
    pub fn draw_system(
        galaxy: &GalaxyGraph,
        system: &System,
        route: &Route,
        hazards: &Hazards,
        output: &mut dyn OutputWriter,
    ) {
        let title = galaxy.long_name(system).unwrap_or(system.name());
        output.writeln(&title.to_uppercase());

        let mut highlights: HashSet<Point> = route.points_in(system).into_iter().collect();
        for pair in route.sectors().windows(2) {
            if pair[0].system() == system && pair[1].system() == system {
                highlights.extend(Segment::new(pair[0].point(), pair[1].point()).walk());
            }
        }

        let mut obstacles = hazards.avoidance_in(system);
        obstacles.extend(
            hazards
                .obstacles()
                .iter()
                .filter(|sector| sector.system() == system)
                .map(|sector| sector.point()),
        );

        Self::draw(GRID_SIZE, &highlights, &obstacles, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::sector::Sector;

    fn sector(galaxy: &GalaxyGraph, system: &str, x: i32, y: i32) -> Sector {
        Sector::new(galaxy, system, Point::new(x, y)).unwrap()
    }

    #[test]
    fn route_lists_waypoints_and_jumps() {
        let galaxy = GalaxyGraph::vendetta().unwrap();
        let route = Route::new(vec![
            sector(&galaxy, "dau", 1, 7),
            sector(&galaxy, "arta", 14, 4),
        ]);
        let mut output = MockOutput::new();
        RoutePresenter::show_route(&route, false, &mut output);
        assert_eq!(
            output.lines(),
            vec!["  1. dau B-9", "  2. arta O-12", "2 WAYPOINTS, 1 JUMPS"]
        );
    }

    #[test]
    fn route_can_include_legacy_ids() {
        let galaxy = GalaxyGraph::vendetta().unwrap();
        let route = Route::new(vec![sector(&galaxy, "dau", 1, 7)]);
        let mut output = MockOutput::new();
        RoutePresenter::show_route(&route, true, &mut output);
        assert_eq!(output.lines()[0], "  1. dau B-9     4738");
    }

    #[test]
    fn empty_route_means_already_there() {
        let mut output = MockOutput::new();
        RoutePresenter::show_route(&Route::default(), false, &mut output);
        assert_eq!(output.lines(), vec!["ALREADY THERE"]);
    }

    #[test]
    fn no_route_explains_why() {
        let mut output = MockOutput::new();
        RoutePresenter::show_no_route(&NoRoute::EmptyItinerary, &mut output);
        assert_eq!(
            output.lines(),
            vec!["NO POSSIBLE ROUTE FOUND", "  (itinerary has no stops)"]
        );
    }

    #[test]
    fn jump_plan_joins_system_names() {
        let galaxy = GalaxyGraph::vendetta().unwrap();
        let plan: JumpPlan = ["dau", "arta", "ukari"]
            .iter()
            .map(|name| galaxy.system(name).unwrap().clone())
            .collect();
        let mut output = MockOutput::new();
        RoutePresenter::show_jump_plan(&plan, &mut output);
        assert_eq!(output.text(), "JUMPS: dau -> arta -> ukari\n");
    }

    #[test]
    fn draw_marks_highlights_over_obstacles() {
        let highlights = HashSet::from([Point::new(0, 0), Point::new(1, 1)]);
        let obstacles = HashSet::from([Point::new(1, 0), Point::new(1, 1)]);
        let mut output = MockOutput::new();
        MapPresenter::draw(3, &highlights, &obstacles, &mut output);
        assert_eq!(
            output.lines(),
            vec!["_______", "|*|X|_|", "|_|*|_|", "|_|_|_|", ""]
        );
    }

    #[test]
    fn system_map_traces_route_legs() {
        let galaxy = GalaxyGraph::vendetta().unwrap();
        let route = Route::new(vec![
            sector(&galaxy, "dau", 0, 0),
            sector(&galaxy, "dau", 3, 0),
            sector(&galaxy, "arta", 14, 4),
        ]);
        let mut hazards = Hazards::new();
        hazards.add_avoidance(sector(&galaxy, "dau", 5, 5));
        let dau = galaxy.system("dau").unwrap();

        let mut output = MockOutput::new();
        MapPresenter::draw_system(&galaxy, dau, &route, &hazards, &mut output);
        let lines = output.lines();
        assert_eq!(lines[0], "DAU");
        assert!(lines[2].starts_with("|*|*|*|*|_|"));
        assert_eq!(&lines[7][..13], "|_|_|_|_|_|X|");
    }
}
