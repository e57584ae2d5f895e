use crate::artifacts::geometry::point::Point;
use std::fmt::Display;

/// An ordered sequence of edit graph points
///
/// Consecutive points always advance `x`, `y` or both by exactly one. Paths are
/// values: `append` returns a new path and leaves the receiver untouched, so the
/// endpoint paths of neighbouring diagonals never alias each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn start(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Builds a path from points, checking that every step is a single move
    pub fn from_points(points: Vec<Point>) -> Self {
        for pair in points.windows(2) {
            assert!(
                pair[0].precedes(&pair[1]),
                "corrupt path: {} cannot be followed by {}",
                pair[0],
                pair[1]
            );
        }

        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point {
        *self
            .points
            .first()
            .unwrap_or_else(|| panic!("first point requested from an empty path"))
    }

    pub fn end(&self) -> Point {
        *self
            .points
            .last()
            .unwrap_or_else(|| panic!("end point requested from an empty path"))
    }

    pub fn diagonal(&self) -> isize {
        self.end().diagonal()
    }

    pub fn append(&self, point: Point) -> Path {
        if let Some(last) = self.points.last() {
            assert!(
                last.precedes(&point),
                "corrupt path: {} cannot be followed by {}",
                last,
                point
            );
        }

        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        points.push(point);

        Path { points }
    }

    /// The maximal suffix whose points all share the end point's diagonal
    pub fn last_snake_suffix(&self) -> Path {
        let diagonal = self.diagonal();
        let run = self
            .points
            .iter()
            .rev()
            .take_while(|point| point.diagonal() == diagonal)
            .count();

        Path {
            points: self.points[self.points.len() - run..].to_vec(),
        }
    }

    /// Applies `transform` to every point, keeping the point order
    pub fn map_points(&self, transform: impl Fn(Point) -> Point) -> Path {
        Path {
            points: self.points.iter().copied().map(transform).collect(),
        }
    }

    pub fn reversed(&self) -> Path {
        Path {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Drops every point outside the `[0, width] x [0, height]` rectangle
    pub fn trimmed(&self, width: isize, height: isize) -> Path {
        Path {
            points: self
                .points
                .iter()
                .copied()
                .filter(|point| point.within(width, height))
                .collect(),
        }
    }

    /// Joins two paths where `other` starts at this path's end point
    pub fn concat(&self, other: &Path) -> Path {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let rest = if other.first() == self.end() {
            &other.points[1..]
        } else {
            &other.points[..]
        };

        let mut points = self.points.clone();
        points.extend_from_slice(rest);

        Path::from_points(points)
    }

    /// Number of right or down moves, i.e. insertions plus deletions
    pub fn edit_count(&self) -> usize {
        self.points
            .windows(2)
            .filter(|pair| pair[0].diagonal() != pair[1].diagonal())
            .count()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let points = self
            .points
            .iter()
            .map(|point| point.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{points}")
    }
}
