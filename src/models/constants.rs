/// Width and height of every system's sector grid.
pub const GRID_SIZE: i32 = 16;

/// Sector ids reserved per system in the legacy numbering.
pub const SECTORS_PER_SYSTEM: i32 = GRID_SIZE * GRID_SIZE;

/// Registry id that maps to the first block of legacy sector ids.
pub const FIRST_SYSTEM_ID: i32 = 2;

/// Cell states used when drawing a system map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Route,
    Obstacle,
}

impl MapCell {
    pub fn symbol(&self) -> &'static str {
        match self {
            MapCell::Empty => "_|",
            MapCell::Route => "*|",
            MapCell::Obstacle => "X|",
        }
    }
}
