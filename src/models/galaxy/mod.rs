//! Galaxy model
//!
//! The interstellar jump graph: registered systems, which systems connect,
//! and where each wormhole sits on its system's grid. Built once, validated
//! at build time, then shared read-only between planners.

mod loader;
mod vendetta;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use log::debug;

use super::constants::GRID_SIZE;
use super::errors::{NavError, NavResult};
use super::point::Point;
use super::sector::{short_system_name, System};

#[derive(Debug)]
struct SystemEntry {
    system: System,
    long_name: String,
    /// Neighbour short name -> wormhole cell in this system leading there.
    wormholes: BTreeMap<Arc<str>, Point>,
}

/// Immutable jump graph.
///
/// Neighbours are always listed in alphabetical order of short name, which
/// fixes the order jump plans are enumerated in.
#[derive(Debug)]
pub struct GalaxyGraph {
    systems: BTreeMap<Arc<str>, SystemEntry>,
    by_id: BTreeMap<u16, Arc<str>>,
    /// Registered long name -> short name.
    long_names: BTreeMap<String, Arc<str>>,
}

impl GalaxyGraph {
    /// Look up a system by its exact short name or its exact registered long
    /// name. Anything else is unknown.
    pub fn system(&self, name: &str) -> NavResult<&System> {
        resolve(&self.systems, &self.long_names, name)
            .and_then(|short| self.systems.get(short))
            .map(|entry| &entry.system)
            .ok_or_else(|| NavError::UnknownSystem(name.to_string()))
    }

    pub fn system_by_id(&self, id: u16) -> Option<&System> {
        self.by_id
            .get(&id)
            .and_then(|name| self.systems.get(name))
            .map(|entry| &entry.system)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.system(name).is_ok()
    }

    /// All systems, alphabetical by short name.
    pub fn systems(&self) -> impl Iterator<Item = &System> {
        self.systems.values().map(|entry| &entry.system)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn long_name(&self, system: &System) -> Option<&str> {
        self.systems
            .get(system.name())
            .map(|entry| entry.long_name.as_str())
    }

    /// Systems one jump away from `system`, alphabetical.
    pub fn neighbors<'a>(&'a self, system: &System) -> impl Iterator<Item = &'a System> + 'a {
        self.systems
            .get(system.name())
            .into_iter()
            .flat_map(|entry| entry.wormholes.keys())
            .filter_map(|name| self.systems.get(name))
            .map(|entry| &entry.system)
    }

    /// Wormhole cell in `from` that jumps to `to`.
    pub fn wormhole(&self, from: &System, to: &System) -> Option<Point> {
        self.systems
            .get(from.name())
            .and_then(|entry| entry.wormholes.get(to.name()))
            .copied()
    }

    /// Undirected jump count.
    pub fn jump_count(&self) -> usize {
        self.systems
            .values()
            .map(|entry| entry.wormholes.len())
            .sum::<usize>()
            / 2
    }
}

fn resolve<'a>(
    systems: &'a BTreeMap<Arc<str>, SystemEntry>,
    long_names: &'a BTreeMap<String, Arc<str>>,
    name: &str,
) -> Option<&'a Arc<str>> {
    systems
        .get_key_value(name)
        .map(|(short, _)| short)
        .or_else(|| long_names.get(name))
}

/// Collects systems, jumps and wormholes, then validates them into a
/// [`GalaxyGraph`].
///
/// Jumps are declared per direction; `build` rejects any jump whose reverse
/// is missing and any jump without wormholes on both sides. Jump and wormhole
/// endpoints name systems the same way [`GalaxyGraph::system`] does.
#[derive(Debug, Default, Clone)]
pub struct GalaxyBuilder {
    systems: Vec<(u16, String)>,
    jumps: Vec<(String, String)>,
    wormholes: Vec<(String, String, Point)>,
}

impl GalaxyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(&mut self, id: u16, long_name: &str) -> &mut Self {
        self.systems.push((id, long_name.to_string()));
        self
    }

    pub fn jump(&mut self, from: &str, to: &str) -> &mut Self {
        self.jumps.push((from.to_string(), to.to_string()));
        self
    }

    pub fn wormhole(&mut self, from: &str, to: &str, point: Point) -> &mut Self {
        self.wormholes.push((from.to_string(), to.to_string(), point));
        self
    }

    pub fn build(&self) -> NavResult<GalaxyGraph> {
        let inconsistent = |msg: String| Err(NavError::InconsistentGalaxy(msg));

        let mut systems: BTreeMap<Arc<str>, SystemEntry> = BTreeMap::new();
        let mut by_id: BTreeMap<u16, Arc<str>> = BTreeMap::new();
        let mut long_names: BTreeMap<String, Arc<str>> = BTreeMap::new();
        for (id, long_name) in &self.systems {
            let name: Arc<str> = short_system_name(long_name).into();
            if name.is_empty() {
                return inconsistent(format!("system {id} has an empty name"));
            }
            if by_id.contains_key(id) {
                return inconsistent(format!("system id {id} registered twice"));
            }
            if systems.contains_key(&name) {
                return inconsistent(format!("system '{name}' registered twice"));
            }
            by_id.insert(*id, name.clone());
            long_names.insert(long_name.clone(), name.clone());
            systems.insert(
                name.clone(),
                SystemEntry {
                    system: System::new(*id, name),
                    long_name: long_name.clone(),
                    wormholes: BTreeMap::new(),
                },
            );
        }
        for (long_name, short) in &long_names {
            if systems.contains_key(long_name.as_str()) && long_name.as_str() != &**short {
                return inconsistent(format!("long name '{long_name}' shadows a short name"));
            }
        }

        let lookup = |name: &str| {
            resolve(&systems, &long_names, name)
                .cloned()
                .ok_or_else(|| NavError::UnknownSystem(name.to_string()))
        };

        let mut jumps: BTreeSet<(Arc<str>, Arc<str>)> = BTreeSet::new();
        for (from, to) in &self.jumps {
            let (from, to) = (lookup(from.as_str())?, lookup(to.as_str())?);
            if from == to {
                return inconsistent(format!("system '{from}' jumps to itself"));
            }
            jumps.insert((from, to));
        }
        for (from, to) in &jumps {
            if !jumps.contains(&(to.clone(), from.clone())) {
                return inconsistent(format!("jump {from} -> {to} has no return jump"));
            }
        }

        let mut placed: Vec<(Arc<str>, Arc<str>, Point)> = Vec::new();
        for (from, to, point) in &self.wormholes {
            let (from, to) = (lookup(from.as_str())?, lookup(to.as_str())?);
            if !jumps.contains(&(from.clone(), to.clone())) {
                return inconsistent(format!("wormhole {from} -> {to} has no matching jump"));
            }
            if !point.is_valid(GRID_SIZE - 1) {
                return inconsistent(format!("wormhole {from} -> {to} at {point} is off the grid"));
            }
            placed.push((from, to, *point));
        }
        for (from, to, point) in placed {
            let Some(entry) = systems.get_mut(&from) else {
                return Err(NavError::UnknownSystem(from.to_string()));
            };
            if entry.wormholes.insert(to.clone(), point).is_some() {
                return inconsistent(format!("wormhole {from} -> {to} declared twice"));
            }
        }

        for (from, to) in &jumps {
            let placed = systems
                .get(from)
                .is_some_and(|entry| entry.wormholes.contains_key(to));
            if !placed {
                return inconsistent(format!("jump {from} -> {to} has no wormhole"));
            }
        }

        let galaxy = GalaxyGraph {
            systems,
            by_id,
            long_names,
        };
        debug!(
            "galaxy built: {} systems, {} jumps",
            galaxy.len(),
            galaxy.jump_count()
        );
        Ok(galaxy)
    }
}
