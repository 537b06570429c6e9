//! Hazard snapshots handed to the planner.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::Rng;

use super::constants::GRID_SIZE;
use super::galaxy::GalaxyGraph;
use super::point::Point;
use super::sector::{Sector, System};

/// How obstacles are treated while routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Obstacles are never flown through and never used as waypoints.
    #[default]
    Safe,
    /// Only storms matter; obstacles are ignored.
    Fast,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Safe => "safe",
            Strategy::Fast => "fast",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" => Ok(Strategy::Safe),
            "fast" => Ok(Strategy::Fast),
            _ => Err("strategy must be 'safe' or 'fast'"),
        }
    }
}

/// Avoidance sectors (storms) and obstacle sectors (stations, asteroid
/// fields), as reported at planning time.
///
/// A straight leg may not cross an avoidance sector. Obstacles only rule
/// out waypoint candidates, unless the strategy is [`Strategy::Safe`], which
/// also avoids them.
#[derive(Debug, Clone, Default)]
pub struct Hazards {
    avoid: HashSet<Sector>,
    obstacles: HashSet<Sector>,
    strategy: Strategy,
}

impl Hazards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Hazards {
            strategy,
            ..Self::default()
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn add_avoidance(&mut self, sector: Sector) -> &mut Self {
        self.avoid.insert(sector);
        self
    }

    pub fn add_obstacle(&mut self, sector: Sector) -> &mut Self {
        self.obstacles.insert(sector);
        self
    }

    pub fn avoidance(&self) -> &HashSet<Sector> {
        &self.avoid
    }

    pub fn obstacles(&self) -> &HashSet<Sector> {
        &self.obstacles
    }

    pub fn is_empty(&self) -> bool {
        self.avoid.is_empty() && self.obstacles.is_empty()
    }

    /// Points a straight leg in `system` must not cross.
    pub fn avoidance_in(&self, system: &System) -> HashSet<Point> {
        let obstacles = match self.strategy {
            Strategy::Safe => Some(&self.obstacles),
            Strategy::Fast => None,
        };
        self.avoid
            .iter()
            .chain(obstacles.into_iter().flatten())
            .filter(|sector| sector.system() == system)
            .map(Sector::point)
            .collect()
    }

    /// Points in `system` that may not be used as waypoints.
    pub fn obstacles_in(&self, system: &System) -> HashSet<Point> {
        if self.strategy == Strategy::Fast {
            return HashSet::new();
        }
        self.obstacles
            .iter()
            .filter(|sector| sector.system() == system)
            .map(Sector::point)
            .collect()
    }

    /// Copy with every itinerary stop cleared from both sets.
    pub fn without<'a>(&self, stops: impl IntoIterator<Item = &'a Sector>) -> Hazards {
        let mut clear = self.clone();
        for stop in stops {
            clear.avoid.remove(stop);
            clear.obstacles.remove(stop);
        }
        clear
    }
}

/// Drop up to `count` storms on random sectors across the galaxy.
/// Repeated draws collapse, so fewer sectors may come back.
pub fn scatter_storms(galaxy: &GalaxyGraph, rng: &mut StdRng, count: usize) -> HashSet<Sector> {
    let systems: Vec<&System> = galaxy.systems().collect();
    if systems.is_empty() {
        return HashSet::new();
    }

    (0..count)
        .map(|_| {
            let system = systems[rng.gen_range(0..systems.len())].clone();
            let point = Point::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
            Sector::on_grid(system, point)
        })
        .collect()
}
