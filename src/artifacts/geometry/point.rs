use derive_new::new;
use std::fmt::Display;

/// A lattice point of the edit graph
///
/// `x` indexes the new (top) sequence and `y` indexes the old (left) sequence.
/// The searches start from the sentinel `{0, -1}`, one step above the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };
    pub const SENTINEL: Point = Point { x: 0, y: -1 };

    pub fn diagonal(&self) -> isize {
        self.x - self.y
    }

    pub fn moved(&self, dx: isize, dy: isize) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Whether the point lies inside the `[0, width] x [0, height]` rectangle
    pub fn within(&self, width: isize, height: isize) -> bool {
        (0..=width).contains(&self.x) && (0..=height).contains(&self.y)
    }

    /// Whether `next` can follow this point on a path: one step right, down or diagonal
    pub fn precedes(&self, next: &Point) -> bool {
        let (dx, dy) = (next.x - self.x, next.y - self.y);
        matches!((dx, dy), (1, 0) | (0, 1) | (1, 1))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
