use crate::artifacts::geometry::path::Path;
use crate::artifacts::geometry::point::Point;
use crate::artifacts::geometry::segment::{Rect, Segment};

/// A coordinate map of the form `p -> origin + sign * p`
///
/// Translations keep `sign = 1`; a flip about `at` is `p -> at - p`. Flips reverse
/// the direction of travel, so paths are reversed and segment endpoints swapped to
/// keep them pointing forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    origin: Point,
    sign: isize,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            origin: Point::ORIGIN,
            sign: 1,
        }
    }

    pub fn translate(by: Point) -> Self {
        Self {
            origin: by,
            sign: 1,
        }
    }

    pub fn flip(at: Point) -> Self {
        Self { origin: at, sign: -1 }
    }

    pub fn is_flip(&self) -> bool {
        self.sign < 0
    }

    /// The transform applying `self` first and `outer` second
    pub fn then(&self, outer: &Transform) -> Transform {
        Transform {
            origin: outer.point(self.origin),
            sign: self.sign * outer.sign,
        }
    }

    pub fn point(&self, point: Point) -> Point {
        Point::new(
            self.origin.x + self.sign * point.x,
            self.origin.y + self.sign * point.y,
        )
    }

    pub fn diagonal(&self, diagonal: isize) -> isize {
        self.origin.x - self.origin.y + self.sign * diagonal
    }

    pub fn path(&self, path: &Path) -> Path {
        let mapped = path.map_points(|point| self.point(point));
        if self.is_flip() {
            mapped.reversed()
        } else {
            mapped
        }
    }

    pub fn segment(&self, segment: &Segment) -> Segment {
        let mapped = Segment::new(self.point(segment.start), self.point(segment.end));
        if self.is_flip() {
            mapped.swapped()
        } else {
            mapped
        }
    }

    pub fn rect(&self, rect: &Rect) -> Rect {
        Rect::spanning(self.point(rect.min), self.point(rect.max))
    }
}
