//! Planned routes

use std::fmt;

use super::point::Point;
use super::sector::{Sector, System};

/// Ordered systems from start to destination, one jump apart.
pub type JumpPlan = Vec<System>;

/// Ordered sectors to fly through
///
/// Consecutive sectors in the same system are joined by a clear straight
/// line; consecutive sectors in different systems are the two ends of a
/// wormhole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route(Vec<Sector>);

impl Route {
    /// Create a new route
    ///
    /// # Arguments
    /// * `sectors` - Waypoints in flight order
    pub fn new(sectors: Vec<Sector>) -> Self {
        Route(sectors)
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Sector> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Sector> {
        self.0.last()
    }

    /// Legacy numeric ids, in flight order.
    pub fn sector_ids(&self) -> Vec<i32> {
        self.0.iter().map(Sector::sector_id).collect()
    }

    /// Systems visited, in order, without consecutive repeats.
    pub fn systems(&self) -> Vec<&System> {
        let mut systems: Vec<&System> = Vec::new();
        for sector in &self.0 {
            if systems.last() != Some(&sector.system()) {
                systems.push(sector.system());
            }
        }
        systems
    }

    /// Waypoints that lie in `system`.
    pub fn points_in(&self, system: &System) -> Vec<Point> {
        self.0
            .iter()
            .filter(|sector| sector.system() == system)
            .map(Sector::point)
            .collect()
    }

    pub fn into_sectors(self) -> Vec<Sector> {
        self.0
    }

    pub(crate) fn extend_from(&mut self, sectors: impl IntoIterator<Item = Sector>) {
        self.0.extend(sectors);
    }
}

impl From<Vec<Sector>> for Route {
    fn from(sectors: Vec<Sector>) -> Self {
        Route(sectors)
    }
}

impl IntoIterator for Route {
    type Item = Sector;
    type IntoIter = std::vec::IntoIter<Sector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Sector;
    type IntoIter = std::slice::Iter<'a, Sector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, sector) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{sector}")?;
        }
        Ok(())
    }
}
