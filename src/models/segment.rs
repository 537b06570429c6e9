use std::collections::HashSet;

use super::point::Point;

/// A straight line between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }

    /// Cells crossed by the segment, from `start` to `end` inclusive.
    ///
    /// Each step moves along one axis, so consecutive cells share an edge.
    /// At exactly 45 degrees the walk steps diagonally instead and never
    /// emits the two corner cells the line only touches.
    pub fn walk(&self) -> Walk {
        Walk::new(self.start, self.end)
    }

    /// Cells along the walk up to, and not including, the first one in `avoid`.
    pub fn sectors<'a>(&self, avoid: &'a HashSet<Point>) -> impl Iterator<Item = Point> + 'a {
        self.walk().take_while(move |point| !avoid.contains(point))
    }

    /// `[start, last clear cell]`, or just `[start]` when the start itself
    /// is in `avoid`. Equals `[start, end]` only if nothing blocks the line.
    pub fn waypoints(&self, avoid: &HashSet<Point>) -> Vec<Point> {
        let mut waypoints = vec![self.start];
        if let Some(end) = self.sectors(avoid).last() {
            waypoints.push(end);
        }
        waypoints
    }
}

/// Incremental integer line walk over a [`Segment`].
#[derive(Debug, Clone)]
pub struct Walk {
    x: i32,
    y: i32,
    x_inc: i32,
    y_inc: i32,
    error: i32,
    dx: i32,
    dy: i32,
    diagonal: bool,
    remaining: i32,
}

impl Walk {
    fn new(start: Point, end: Point) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        Walk {
            x: start.x,
            y: start.y,
            x_inc: if end.x > start.x { 1 } else { -1 },
            y_inc: if end.y > start.y { 1 } else { -1 },
            error: dx - dy,
            dx: dx * 2,
            dy: dy * 2,
            diagonal: dx == dy,
            remaining: 1 + dx + dy,
        }
    }
}

impl Iterator for Walk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining <= 0 {
            return None;
        }
        let point = Point::new(self.x, self.y);

        if self.diagonal {
            self.x += self.x_inc;
            self.y += self.y_inc;
            self.remaining -= 1;
        } else if self.error > 0 {
            self.x += self.x_inc;
            self.error -= self.dy;
        } else {
            self.y += self.y_inc;
            self.error += self.dx;
        }
        self.remaining -= 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.remaining <= 0 {
            0
        } else if self.diagonal {
            ((self.remaining + 1) / 2) as usize
        } else {
            self.remaining as usize
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Walk {}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
        Segment::new(from.into(), to.into())
            .walk()
            .map(|p| (p.x, p.y))
            .collect()
    }

    fn avoid(coords: &[(i32, i32)]) -> HashSet<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn walk_single_point() {
        assert_eq!(walk((4, 4), (4, 4)), vec![(4, 4)]);
    }

    #[test]
    fn walk_diagonal_skips_corner_cells() {
        assert_eq!(walk((0, 0), (3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(walk((3, 0), (0, 3)), vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn walk_shallow_slope_steps_one_axis_at_a_time() {
        assert_eq!(
            walk((0, 0), (3, 1)),
            vec![(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(
            walk((0, 0), (1, 3)),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 3)]
        );
    }

    #[test]
    fn walk_runs_backwards() {
        assert_eq!(
            walk((3, 0), (0, 2)),
            vec![(3, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)]
        );
        assert_eq!(walk((5, 2), (2, 2)), vec![(5, 2), (4, 2), (3, 2), (2, 2)]);
    }

    #[test]
    fn walk_reports_exact_length() {
        let straight = Segment::new(Point::new(0, 0), Point::new(5, 2)).walk();
        assert_eq!(straight.len(), 8);
        let diagonal = Segment::new(Point::new(9, 9), Point::new(4, 4)).walk();
        assert_eq!(diagonal.len(), 6);
    }

    #[test]
    fn sectors_stop_before_first_avoided_cell() {
        let segment = Segment::new(Point::new(0, 0), Point::new(5, 0));
        let blocked = avoid(&[(3, 0), (4, 0)]);
        let clear: Vec<Point> = segment.sectors(&blocked).collect();
        assert_eq!(clear, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
    }

    #[test]
    fn waypoints_of_clear_segment_are_its_ends() {
        let segment = Segment::new(Point::new(2, 2), Point::new(9, 5));
        assert_eq!(
            segment.waypoints(&avoid(&[(0, 0)])),
            vec![Point::new(2, 2), Point::new(9, 5)]
        );
    }

    #[test]
    fn waypoints_stop_at_last_clear_cell() {
        let segment = Segment::new(Point::new(0, 0), Point::new(0, 5));
        assert_eq!(
            segment.waypoints(&avoid(&[(0, 3)])),
            vec![Point::new(0, 0), Point::new(0, 2)]
        );
    }

    #[test]
    fn waypoints_with_blocked_start_hold_only_start() {
        let segment = Segment::new(Point::new(1, 1), Point::new(4, 4));
        assert_eq!(segment.waypoints(&avoid(&[(1, 1)])), vec![Point::new(1, 1)]);
    }
}
