//! Route assembly
//!
//! Picks a jump plan, then runs a local search per system between the
//! system's entry and exit cells and stitches the legs together.

use log::{debug, warn};

use super::deadline::Deadline;
use super::interstellar::shortest_jump_plans_within;
use super::local::Path;
use crate::models::constants::GRID_SIZE;
use crate::models::errors::NoRoute;
use crate::models::galaxy::GalaxyGraph;
use crate::models::hazards::Hazards;
use crate::models::point::Point;
use crate::models::route::Route;
use crate::models::sector::{Sector, System};

/// Plan a route from `start` to `end`.
///
/// The result starts at `start` (unless `start` is already the wormhole
/// out of its system) and ends at `end`. Each system contributes its local
/// waypoints; wormhole transitions appear as the exit cell of one system
/// followed by the entry cell of the next.
pub fn plan_route(
    galaxy: &GalaxyGraph,
    start: &Sector,
    end: &Sector,
    hazards: &Hazards,
) -> Result<Route, NoRoute> {
    plan_route_within(galaxy, start, end, hazards, Deadline::none())
}

pub fn plan_route_within(
    galaxy: &GalaxyGraph,
    start: &Sector,
    end: &Sector,
    hazards: &Hazards,
    deadline: Deadline,
) -> Result<Route, NoRoute> {
    let plans = shortest_jump_plans_within(galaxy, start.system(), end.system(), deadline)?;
    let Some(systems) = plans.into_iter().next() else {
        return Err(disconnected(start.system(), end.system()));
    };
    debug!(
        "route {start} -> {end} via {}",
        systems
            .iter()
            .map(System::name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    if let [system] = systems.as_slice() {
        let leg = route_leg(system, start.point(), end.point(), hazards, deadline)?;
        return Ok(Route::new(leg));
    }

    let mut route = Route::default();
    for (i, system) in systems.iter().enumerate() {
        let exit = match systems.get(i + 1) {
            Some(next) => wormhole(galaxy, system, next)?,
            None => end.point(),
        };
        let entry = match i.checked_sub(1).and_then(|prev| systems.get(prev)) {
            Some(prev) => wormhole(galaxy, system, prev)?,
            None if start.point() == exit => {
                debug!("{start} is already the wormhole out of {system}");
                continue;
            }
            None => start.point(),
        };
        route.extend_from(route_leg(system, entry, exit, hazards, deadline)?);
    }
    Ok(route)
}

/// Chain `stops` into one route.
///
/// Stops are always flyable, even when reported as hazards. The result
/// leaves out the first stop, so chained itineraries never repeat a
/// junction; a single stop gives an empty route.
pub fn navigate(galaxy: &GalaxyGraph, stops: &[Sector], hazards: &Hazards) -> Result<Route, NoRoute> {
    navigate_within(galaxy, stops, hazards, Deadline::none())
}

pub fn navigate_within(
    galaxy: &GalaxyGraph,
    stops: &[Sector],
    hazards: &Hazards,
    deadline: Deadline,
) -> Result<Route, NoRoute> {
    if stops.is_empty() {
        return Err(NoRoute::EmptyItinerary);
    }
    let hazards = hazards.without(stops);

    let mut route = Route::default();
    for pair in stops.windows(2) {
        let leg = plan_route_within(galaxy, &pair[0], &pair[1], &hazards, deadline)?;
        route.extend_from(leg.into_iter().skip(1));
    }
    Ok(route)
}

fn disconnected(from: &System, to: &System) -> NoRoute {
    NoRoute::Disconnected {
        from: from.name().to_string(),
        to: to.name().to_string(),
    }
}

fn wormhole(galaxy: &GalaxyGraph, from: &System, to: &System) -> Result<Point, NoRoute> {
    galaxy
        .wormhole(from, to)
        .ok_or_else(|| disconnected(from, to))
}

fn route_leg(
    system: &System,
    entry: Point,
    exit: Point,
    hazards: &Hazards,
    deadline: Deadline,
) -> Result<Vec<Sector>, NoRoute> {
    let mut path = Path::new(GRID_SIZE, entry, exit).with_deadline(deadline);
    path.extend_obstacles(hazards.obstacles_in(system));
    path.extend_avoidance(hazards.avoidance_in(system));

    match path.calculate_path() {
        Some(points) => Ok(points
            .into_iter()
            .map(|point| Sector::on_grid(system.clone(), point))
            .collect()),
        None if path.deadline_expired() => {
            warn!("route search in {system} ran out of time");
            Err(NoRoute::DeadlineExceeded)
        }
        None => Err(NoRoute::Blocked {
            system: system.name().to_string(),
            from: entry,
            to: exit,
        }),
    }
}
