use std::fmt;

/// A cell on a system's sector grid.
/// (0,0) is upper-left. X increases left-to-right, Y increases top-to-bottom.
/// Coordinates are signed because spiral enumeration runs past the grid
/// edges; callers filter with [`Point::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// True if both coordinates lie in `0..=size`.
    pub fn is_valid(&self, size: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x <= size && self.y <= size
    }

    /// Candidate cells spiralling out from this point, nearest rings first.
    pub fn spiral(self) -> Spiral {
        Spiral::new(self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Top,
    Right,
    Bottom,
    Left,
    Close,
}

/// Infinite ring-by-ring enumeration around an origin.
///
/// Each ring walks the top edge left-to-right, the right edge downwards, the
/// bottom edge right-to-left and the left edge upwards, then yields its
/// closing corner. The ordering is the legacy one waypoint selection was
/// tuned against: after every ring the centre moves up one row, so the lower
/// edge stays one row below the origin, and the left edge climbs until it
/// reaches row `origin.x - r`. Recreate the iterator to restart it; clones
/// resume independently.
#[derive(Debug, Clone)]
pub struct Spiral {
    x: i32,
    y: i32,
    r: i32,
    i: i32,
    j: i32,
    leg: Leg,
}

impl Spiral {
    fn new(origin: Point) -> Self {
        Spiral {
            x: origin.x,
            y: origin.y,
            r: 1,
            i: origin.x - 1,
            j: origin.y - 1,
            leg: Leg::Top,
        }
    }

    fn cursor(&self) -> Point {
        Point::new(self.i, self.j)
    }
}

impl Iterator for Spiral {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            match self.leg {
                Leg::Top if self.i < self.x + self.r => {
                    self.i += 1;
                    return Some(self.cursor());
                }
                Leg::Top => self.leg = Leg::Right,
                Leg::Right if self.j < self.y + self.r => {
                    self.j += 1;
                    return Some(self.cursor());
                }
                Leg::Right => self.leg = Leg::Bottom,
                Leg::Bottom if self.i > self.x - self.r => {
                    self.i -= 1;
                    return Some(self.cursor());
                }
                Leg::Bottom => self.leg = Leg::Left,
                Leg::Left if self.j > self.x - self.r => {
                    self.j -= 1;
                    return Some(self.cursor());
                }
                Leg::Left => self.leg = Leg::Close,
                Leg::Close => {
                    self.r += 1;
                    self.y -= 1;
                    self.leg = Leg::Top;
                    return Some(self.cursor());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
