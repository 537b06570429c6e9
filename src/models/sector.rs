use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::constants::{FIRST_SYSTEM_ID, GRID_SIZE, SECTORS_PER_SYSTEM};
use super::errors::{NavError, NavResult};
use super::galaxy::GalaxyGraph;
use super::point::Point;

/// A registered star system: numeric registry id plus canonical short name.
/// Equality, hashing and ordering go by id.
#[derive(Debug, Clone)]
pub struct System {
    id: u16,
    name: Arc<str>,
}

impl System {
    pub(crate) fn new(id: u16, name: Arc<str>) -> Self {
        System { id, name }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for System {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for System {}

impl Hash for System {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for System {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for System {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Canonical short name: first word of the long name, lower-cased
/// ("Arta Caelestis" -> "arta").
pub fn short_system_name(long_name: &str) -> String {
    long_name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Grid point -> in-game numbering: 1-based column, rows counted up from the bottom.
pub fn point_to_game(point: Point) -> (i32, i32) {
    (point.x + 1, GRID_SIZE - point.y)
}

/// In-game numbering -> grid point.
pub fn game_to_point(x: i32, y: i32) -> Point {
    Point::new(x - 1, GRID_SIZE - y)
}

/// Grid point -> in-game reference such as `('B', 9)`.
pub fn point_to_grid_ref(point: Point) -> (char, i32) {
    let (x, y) = point_to_game(point);
    let column = char::from_u32('A' as u32 + (x - 1) as u32).unwrap_or('?');
    (column, y)
}

/// Parse an in-game reference such as `B-9` (column letter, row number).
pub fn parse_grid_ref(text: &str) -> NavResult<Point> {
    let invalid = || NavError::InvalidSector(text.to_string());
    let (column, row) = text.trim().split_once('-').ok_or_else(invalid)?;

    let mut letters = column.chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return Err(invalid()),
    };
    let x = letter as i32 - 'A' as i32 + 1;
    let y: i32 = row.trim().parse().map_err(|_| invalid())?;

    if !(1..=GRID_SIZE).contains(&x) || !(1..=GRID_SIZE).contains(&y) {
        return Err(invalid());
    }
    Ok(game_to_point(x, y))
}

/// One cell of one system.
///
/// Always inside the grid, so the legacy numeric id is unique per sector
/// and hashing/ordering can use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    system: System,
    point: Point,
}

impl Sector {
    /// Resolve `system` in the galaxy registry and place `point` in it.
    pub fn new(galaxy: &GalaxyGraph, system: &str, point: Point) -> NavResult<Self> {
        let system = galaxy.system(system)?.clone();
        Sector::in_system(system, point)
    }

    pub fn in_system(system: System, point: Point) -> NavResult<Self> {
        if !point.is_valid(GRID_SIZE - 1) {
            return Err(NavError::OutOfBounds {
                x: point.x,
                y: point.y,
                size: GRID_SIZE,
            });
        }
        Ok(Sector { system, point })
    }

    /// Points handed out by the planner are grid cells by construction.
    pub(crate) fn on_grid(system: System, point: Point) -> Self {
        debug_assert!(point.is_valid(GRID_SIZE - 1), "{point} is off the grid");
        Sector { system, point }
    }

    /// Parse `"dau B-9"`, `"dau:B-9"` or `"Arta Caelestis O-12"`.
    pub fn parse(galaxy: &GalaxyGraph, text: &str) -> NavResult<Self> {
        let (system, grid_ref) = text
            .trim()
            .rsplit_once([' ', ':'])
            .ok_or_else(|| NavError::InvalidSector(text.to_string()))?;
        let point = parse_grid_ref(grid_ref)?;
        Sector::new(galaxy, system.trim(), point)
    }

    /// Decode a legacy numeric sector id.
    pub fn from_id(galaxy: &GalaxyGraph, id: i32) -> NavResult<Self> {
        let offset = id.checked_sub(1).ok_or(NavError::InvalidSectorId(id))?;
        let system_id = offset.div_euclid(SECTORS_PER_SYSTEM) + FIRST_SYSTEM_ID;
        let local = offset.rem_euclid(SECTORS_PER_SYSTEM);

        let system = u16::try_from(system_id)
            .ok()
            .and_then(|sid| galaxy.system_by_id(sid))
            .ok_or(NavError::InvalidSectorId(id))?;
        let point = game_to_point(local % GRID_SIZE + 1, local / GRID_SIZE + 1);
        Ok(Sector::on_grid(system.clone(), point))
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// Legacy numeric id: `(system - 2) * 256 + (row - 1) * 16 + column`
    /// with 1-based in-game column and row.
    pub fn sector_id(&self) -> i32 {
        let (x, y) = point_to_game(self.point);
        (self.system.id() as i32 - FIRST_SYSTEM_ID) * SECTORS_PER_SYSTEM + (y - 1) * GRID_SIZE + x
    }
}

impl Hash for Sector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sector_id().hash(state);
    }
}

impl PartialOrd for Sector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sector_id().cmp(&other.sector_id())
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (column, row) = point_to_grid_ref(self.point);
        write!(f, "{} {}-{}", self.system, column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn galaxy() -> GalaxyGraph {
        GalaxyGraph::vendetta().unwrap()
    }

    #[test]
    fn short_name_is_first_word_lowercased() {
        assert_eq!(short_system_name("Arta Caelestis"), "arta");
        assert_eq!(short_system_name("Sol II"), "sol");
        assert_eq!(short_system_name("dau"), "dau");
        assert_eq!(short_system_name(""), "");
    }

    #[test]
    fn grid_ref_conversions() {
        assert_eq!(parse_grid_ref("B-9").unwrap(), Point::new(1, 7));
        assert_eq!(parse_grid_ref("a-16").unwrap(), Point::new(0, 0));
        assert_eq!(parse_grid_ref("P-1").unwrap(), Point::new(15, 15));
        assert_eq!(point_to_grid_ref(Point::new(14, 4)), ('O', 12));
    }

    #[test]
    fn grid_ref_rejects_malformed_input() {
        for bad in ["", "B9", "Q-3", "B-0", "B-17", "BB-2", "7-7", "B-x"] {
            assert!(
                matches!(parse_grid_ref(bad), Err(NavError::InvalidSector(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn sector_id_matches_legacy_numbering() {
        let galaxy = galaxy();
        let dau = Sector::new(&galaxy, "dau", Point::new(1, 7)).unwrap();
        assert_eq!(dau.sector_id(), 4738);

        let sol_top_left = Sector::new(&galaxy, "sol", Point::new(0, 0)).unwrap();
        assert_eq!(sol_top_left.sector_id(), 241);

        let sol_bottom_left = Sector::new(&galaxy, "sol", Point::new(0, 15)).unwrap();
        assert_eq!(sol_bottom_left.sector_id(), 1);
    }

    #[test]
    fn from_id_decodes_sector() {
        let galaxy = galaxy();
        let sector = Sector::from_id(&galaxy, 4738).unwrap();
        assert_eq!(sector.system().name(), "dau");
        assert_eq!(sector.point(), Point::new(1, 7));
    }

    #[test]
    fn from_id_rejects_unregistered_system() {
        let galaxy = galaxy();
        assert!(matches!(
            Sector::from_id(&galaxy, 0),
            Err(NavError::InvalidSectorId(0))
        ));
        assert!(matches!(
            Sector::from_id(&galaxy, 30 * 256 + 1),
            Err(NavError::InvalidSectorId(_))
        ));
        for id in [i32::MIN, i32::MIN + 1, -1, i32::MAX] {
            assert!(matches!(
                Sector::from_id(&galaxy, id),
                Err(NavError::InvalidSectorId(bad)) if bad == id
            ));
        }
    }

    #[test]
    fn unknown_system_rejected() {
        let galaxy = galaxy();
        let err = Sector::new(&galaxy, "vulcan", Point::new(1, 1)).unwrap_err();
        assert!(matches!(err, NavError::UnknownSystem(name) if name == "vulcan"));
    }

    #[test]
    fn off_grid_point_rejected() {
        let galaxy = galaxy();
        let err = Sector::new(&galaxy, "dau", Point::new(16, 0)).unwrap_err();
        assert!(matches!(err, NavError::OutOfBounds { x: 16, y: 0, size: 16 }));
    }

    #[test]
    fn unknown_system_names_are_not_coerced() {
        let galaxy = galaxy();
        for name in ["arta bogus", "DAU", "arta caelestis", "vulcan"] {
            let err = Sector::new(&galaxy, name, Point::new(1, 1)).unwrap_err();
            assert!(matches!(err, NavError::UnknownSystem(n) if n == name));
        }
        assert!(matches!(
            Sector::parse(&galaxy, "arta bogus O-12"),
            Err(NavError::UnknownSystem(_))
        ));
    }

    #[test]
    fn parse_accepts_both_separators_and_long_names() {
        let galaxy = galaxy();
        let expected = Sector::new(&galaxy, "dau", Point::new(1, 7)).unwrap();
        assert_eq!(Sector::parse(&galaxy, "dau B-9").unwrap(), expected);
        assert_eq!(Sector::parse(&galaxy, "dau:b-9").unwrap(), expected);
        assert_eq!(Sector::parse(&galaxy, "Dau B-9").unwrap(), expected);

        let arta = Sector::parse(&galaxy, "Arta Caelestis O-12").unwrap();
        assert_eq!(arta.system().name(), "arta");
        assert_eq!(arta.point(), Point::new(14, 4));
    }

    #[test]
    fn display_uses_game_notation() {
        let galaxy = galaxy();
        let sector = Sector::new(&galaxy, "arta", Point::new(14, 4)).unwrap();
        assert_eq!(sector.to_string(), "arta O-12");
    }

    #[test]
    fn ordering_follows_sector_id() {
        let galaxy = galaxy();
        let low = Sector::new(&galaxy, "sol", Point::new(3, 3)).unwrap();
        let high = Sector::new(&galaxy, "dau", Point::new(0, 15)).unwrap();
        assert!(low < high);
    }
}
