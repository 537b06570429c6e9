//! Local path search inside one system's grid.
//!
//! Tries a straight line first, then one waypoint, then two. Waypoint
//! candidates come from a spiral around the start (or, for the second
//! waypoint, around the end), so the chosen route is the first that works
//! in spiral order rather than the shortest.

use std::collections::HashSet;

use log::{debug, trace};

use super::deadline::Deadline;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Planning context for one leg.
///
/// Avoidance points block straight lines. Obstacle points only rule out
/// waypoint candidates. The leg's own start and end are never registered
/// in either set.
#[derive(Debug, Clone)]
pub struct Path {
    size: i32,
    start: Point,
    end: Point,
    obstacles: HashSet<Point>,
    avoid: HashSet<Point>,
    deadline: Deadline,
}

impl Path {
    pub fn new(size: i32, start: Point, end: Point) -> Self {
        Path {
            size,
            start,
            end,
            obstacles: HashSet::new(),
            avoid: HashSet::new(),
            deadline: Deadline::none(),
        }
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    fn is_endpoint(&self, point: Point) -> bool {
        point == self.start || point == self.end
    }

    /// Register an obstacle. Returns false, and ignores the point, if it is
    /// this leg's start or end.
    pub fn add_obstacle(&mut self, point: Point) -> bool {
        if self.is_endpoint(point) {
            return false;
        }
        self.obstacles.insert(point);
        true
    }

    /// Register an avoidance point. Returns false, and ignores the point, if
    /// it is this leg's start or end.
    pub fn add_avoidance(&mut self, point: Point) -> bool {
        if self.is_endpoint(point) {
            return false;
        }
        self.avoid.insert(point);
        true
    }

    pub fn extend_obstacles(&mut self, points: impl IntoIterator<Item = Point>) {
        for point in points {
            self.add_obstacle(point);
        }
    }

    pub fn extend_avoidance(&mut self, points: impl IntoIterator<Item = Point>) {
        for point in points {
            self.add_avoidance(point);
        }
    }

    pub fn deadline_expired(&self) -> bool {
        self.deadline.expired()
    }

    /// On the grid and in neither hazard set.
    pub fn is_valid_point(&self, point: Point) -> bool {
        point.is_valid(self.size - 1)
            && !self.obstacles.contains(&point)
            && !self.avoid.contains(&point)
    }

    pub fn has_clear_path(&self, from: Point, to: Point) -> bool {
        Segment::new(from, to).waypoints(&self.avoid) == [from, to]
    }

    /// Usable waypoint candidates around `origin`, nearest rings first.
    ///
    /// At most `size * size` raw spiral points are examined, and enumeration
    /// stops early once the deadline passes.
    pub fn spiral_candidates(&self, origin: Point) -> impl Iterator<Item = Point> + '_ {
        let budget = usize::try_from(self.size * self.size).unwrap_or(0);
        origin
            .spiral()
            .take(budget)
            .take_while(move |_| !self.deadline.expired())
            .filter(move |&point| self.is_valid_point(point))
    }

    /// First candidate around `from` with a clear line to both ends.
    pub fn find_waypoint(&self, from: Point, to: Point) -> Option<Point> {
        self.spiral_candidates(from).find(|&candidate| {
            trace!("waypoint candidate {candidate} for {from} -> {to}");
            self.has_clear_path(from, candidate) && self.has_clear_path(candidate, to)
        })
    }

    /// Two waypoints `(w, p)`: `p` is the first candidate around `to` with a
    /// clear line to `to` that `find_waypoint(from, p)` can also reach.
    pub fn find_waypoint2(&self, from: Point, to: Point) -> Option<(Point, Point)> {
        self.spiral_candidates(to)
            .filter(|&candidate| self.has_clear_path(candidate, to))
            .find_map(|candidate| {
                trace!("second waypoint candidate {candidate} for {from} -> {to}");
                self.find_waypoint(from, candidate)
                    .map(|waypoint| (waypoint, candidate))
            })
    }

    /// Route from this leg's start to its end.
    pub fn calculate_path(&self) -> Option<Vec<Point>> {
        self.calculate_path_between(self.start, self.end)
    }

    /// `[from, to]`, `[from, w, to]` or `[from, w, p, to]`, whichever is
    /// found first; `None` once all three fail.
    pub fn calculate_path_between(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        if self.has_clear_path(from, to) {
            debug!("{from} -> {to}: direct");
            return Some(vec![from, to]);
        }
        if let Some(waypoint) = self.find_waypoint(from, to) {
            debug!("{from} -> {to}: one waypoint at {waypoint}");
            return Some(vec![from, waypoint, to]);
        }
        if let Some((waypoint, second)) = self.find_waypoint2(from, to) {
            debug!("{from} -> {to}: waypoints at {waypoint} and {second}");
            return Some(vec![from, waypoint, second, to]);
        }
        debug!("{from} -> {to}: no clear path");
        None
    }
}
