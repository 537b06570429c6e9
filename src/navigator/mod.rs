//! Planner facade
//!
//! The Navigator owns a shared galaxy and the planner options, and is the
//! entry point used by the binary and by anything embedding the planner.
//! It is cheap to clone and safe to share between threads.

use std::sync::Arc;
use std::time::Duration;

use crate::models::errors::{NavResult, NoRoute};
use crate::models::galaxy::GalaxyGraph;
use crate::models::hazards::Hazards;
use crate::models::point::Point;
use crate::models::route::{JumpPlan, Route};
use crate::models::sector::Sector;
use crate::services::navigation::{self, Deadline};

/// Tunables applied to every planning call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Wall-clock budget per call; `None` searches to completion.
    pub timeout: Option<Duration>,
}

/// Route planner bound to one galaxy
#[derive(Clone)]
pub struct Navigator {
    galaxy: Arc<GalaxyGraph>,
    options: NavigatorOptions,
}

impl Navigator {
    /// Creates a navigator with default options
    ///
    /// # Arguments
    ///
    /// * `galaxy` - Validated galaxy shared with other planners
    pub fn new(galaxy: Arc<GalaxyGraph>) -> Self {
        Self::with_options(galaxy, NavigatorOptions::default())
    }

    pub fn with_options(galaxy: Arc<GalaxyGraph>, options: NavigatorOptions) -> Self {
        Self { galaxy, options }
    }

    /// Creates a navigator over the built-in galaxy
    pub fn vendetta() -> NavResult<Self> {
        Ok(Self::new(Arc::new(GalaxyGraph::vendetta()?)))
    }

    /// Returns the galaxy this navigator plans over
    pub fn galaxy(&self) -> &GalaxyGraph {
        &self.galaxy
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    /// Resolves a sector in this navigator's galaxy
    ///
    /// # Returns
    ///
    /// * `Err(NavError::UnknownSystem)` if the system is not registered
    /// * `Err(NavError::OutOfBounds)` if the point is off the grid
    pub fn sector(&self, system: &str, point: Point) -> NavResult<Sector> {
        Sector::new(&self.galaxy, system, point)
    }

    /// Parses game notation such as `dau B-9`
    pub fn parse_sector(&self, text: &str) -> NavResult<Sector> {
        Sector::parse(&self.galaxy, text)
    }

    /// Decodes a legacy numeric sector id
    pub fn sector_from_id(&self, id: i32) -> NavResult<Sector> {
        Sector::from_id(&self.galaxy, id)
    }

    /// Plans a route between two sectors
    ///
    /// # Arguments
    ///
    /// * `start` - Where the ship is
    /// * `end` - Where it should go
    /// * `hazards` - Storms and obstacles reported for this call
    ///
    /// # Returns
    ///
    /// * `Ok(Route)` starting at `start` and ending at `end`
    /// * `Err(NoRoute)` if the systems are disconnected, a leg is blocked or
    ///   the timeout passed
    pub fn plan_route(&self, start: &Sector, end: &Sector, hazards: &Hazards) -> Result<Route, NoRoute> {
        navigation::plan_route_within(&self.galaxy, start, end, hazards, self.deadline())
    }

    /// Plans a route through every stop in order
    ///
    /// The returned route leaves out the first stop. Stops are treated as
    /// clear even when `hazards` lists them.
    pub fn navigate(&self, stops: &[Sector], hazards: &Hazards) -> Result<Route, NoRoute> {
        navigation::navigate_within(&self.galaxy, stops, hazards, self.deadline())
    }

    /// Every minimum-length jump plan between two systems, by name
    pub fn shortest_jump_plans(&self, from: &str, to: &str) -> NavResult<Vec<JumpPlan>> {
        let start = self.galaxy.system(from)?;
        let end = self.galaxy.system(to)?;
        Ok(navigation::shortest_jump_plans_within(
            &self.galaxy,
            start,
            end,
            self.deadline(),
        )?)
    }

    fn deadline(&self) -> Deadline {
        Deadline::from_timeout(self.options.timeout)
    }
}
