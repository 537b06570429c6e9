//! Interstellar planning over the galaxy jump graph.
//!
//! Plans are listed in depth-first order with neighbours taken
//! alphabetically, so ties between equally short plans always come back in
//! the same order.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, warn};

use super::deadline::Deadline;
use crate::models::errors::NoRoute;
use crate::models::galaxy::GalaxyGraph;
use crate::models::route::JumpPlan;
use crate::models::sector::System;

/// Every simple path from `start` to `end`.
///
/// Exponential in the size of the graph; kept for diagnostics and as the
/// reference ordering for [`shortest_jump_plans`].
pub fn all_jump_plans(galaxy: &GalaxyGraph, start: &System, end: &System) -> Vec<JumpPlan> {
    fn visit<'g>(
        galaxy: &'g GalaxyGraph,
        current: &'g System,
        end: &System,
        visited: &mut HashSet<&'g System>,
        route: &mut Vec<&'g System>,
        plans: &mut Vec<JumpPlan>,
    ) {
        if !visited.insert(current) {
            return;
        }
        route.push(current);
        if current == end {
            plans.push(route.iter().map(|&system| system.clone()).collect());
        } else {
            for next in galaxy.neighbors(current) {
                visit(galaxy, next, end, visited, route, plans);
            }
        }
        route.pop();
        visited.remove(current);
    }

    let mut plans = Vec::new();
    if let (Ok(start), Ok(end)) = (galaxy.system(start.name()), galaxy.system(end.name())) {
        visit(galaxy, start, end, &mut HashSet::new(), &mut Vec::new(), &mut plans);
    }
    plans
}

/// Every plan of minimum length from `start` to `end`. Empty if the two
/// systems are not connected.
pub fn shortest_jump_plans(galaxy: &GalaxyGraph, start: &System, end: &System) -> Vec<JumpPlan> {
    shortest_jump_plans_within(galaxy, start, end, Deadline::none()).unwrap_or_default()
}

/// [`shortest_jump_plans`] that gives up with
/// [`NoRoute::DeadlineExceeded`] once `deadline` passes.
pub fn shortest_jump_plans_within(
    galaxy: &GalaxyGraph,
    start: &System,
    end: &System,
    deadline: Deadline,
) -> Result<Vec<JumpPlan>, NoRoute> {
    let (Ok(start), Ok(end)) = (galaxy.system(start.name()), galaxy.system(end.name())) else {
        return Ok(Vec::new());
    };

    let distances = distances_to(galaxy, end);
    let mut plans = Vec::new();
    if distances.contains_key(start) {
        let mut route = Vec::new();
        descend(galaxy, start, &distances, deadline, &mut route, &mut plans)?;
    }

    debug!(
        "{} shortest jump plan(s) from {start} to {end}",
        plans.len()
    );
    Ok(plans)
}

/// Jump count from every reachable system to `end`.
fn distances_to<'g>(galaxy: &'g GalaxyGraph, end: &'g System) -> HashMap<&'g System, usize> {
    let mut distances = HashMap::from([(end, 0)]);
    let mut queue = VecDeque::from([end]);
    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current] + 1;
        for next in galaxy.neighbors(current) {
            if !distances.contains_key(next) {
                distances.insert(next, next_distance);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Follow only edges that bring the plan one jump closer to the end.
fn descend<'g>(
    galaxy: &'g GalaxyGraph,
    current: &'g System,
    distances: &HashMap<&'g System, usize>,
    deadline: Deadline,
    route: &mut Vec<&'g System>,
    plans: &mut Vec<JumpPlan>,
) -> Result<(), NoRoute> {
    if deadline.expired() {
        warn!("jump plan search deadline exceeded at {current}");
        return Err(NoRoute::DeadlineExceeded);
    }

    route.push(current);
    let remaining = distances.get(current).copied().unwrap_or(0);
    if remaining == 0 {
        plans.push(route.iter().map(|&system| system.clone()).collect());
    } else {
        for next in galaxy.neighbors(current) {
            if distances.get(next) == Some(&(remaining - 1)) {
                descend(galaxy, next, distances, deadline, route, plans)?;
            }
        }
    }
    route.pop();
    Ok(())
}
