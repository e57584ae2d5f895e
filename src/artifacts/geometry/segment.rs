use crate::artifacts::geometry::point::Point;
use derive_new::new;

/// A single edge of the edit graph, used for highlight and candidate geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn swapped(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// A sub-range of the edit graph, `min` and `max` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds the rectangle spanned by two opposite corners in any order
    pub fn spanning(a: Point, b: Point) -> Self {
        Self::new(
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
}
