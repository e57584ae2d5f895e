use crate::artifacts::geometry::path::Path;
use crate::artifacts::geometry::point::Point;
use crate::artifacts::geometry::segment::{Rect, Segment};
use crate::artifacts::geometry::transform::Transform;
use crate::artifacts::tagged::TaggedString;

/// One entry of a search trace
///
/// Records are immutable once pushed: remapping a record into another coordinate
/// space or attaching focus rectangles produces a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Diagonal (`x - y`) being extended
    pub diagonal: isize,
    /// Endpoint paths of this search by increasing diagonal, trimmed to the grid
    pub endpoints: Vec<Path>,
    /// Endpoint paths of the opposite search of a middle-snake run, in the same coordinates
    pub opposing: Vec<Path>,
    /// The path being extended, up to the point this record was emitted
    pub path: Path,
    pub tagged: TaggedString,
    /// The edge just taken followed by the snake edges walked since
    pub highlights: Vec<Segment>,
    /// Moves that were available from the neighbouring diagonals
    pub candidates: Vec<Segment>,
    /// Set on the record of an outer step move, clear on snake continuations
    pub top_level: bool,
    /// Produced by the reverse half of a middle-snake search
    pub reverse: bool,
    /// Sub-problems under consideration, outermost first
    pub focus_rects: Vec<Rect>,
}

impl StepRecord {
    /// The point the record's search is extending
    ///
    /// Reverse records are flipped into forward coordinates, which turns their
    /// path around: the moving end is the first point, not the last.
    pub fn head(&self) -> Point {
        if self.reverse {
            self.path.first()
        } else {
            self.path.end()
        }
    }

    pub fn transformed(&self, transform: &Transform) -> StepRecord {
        StepRecord {
            diagonal: transform.diagonal(self.diagonal),
            endpoints: self.endpoints.iter().map(|p| transform.path(p)).collect(),
            opposing: self.opposing.iter().map(|p| transform.path(p)).collect(),
            path: transform.path(&self.path),
            tagged: if transform.is_flip() {
                self.tagged.reversed()
            } else {
                self.tagged.clone()
            },
            highlights: self.highlights.iter().map(|s| transform.segment(s)).collect(),
            candidates: self.candidates.iter().map(|s| transform.segment(s)).collect(),
            top_level: self.top_level,
            reverse: self.reverse,
            focus_rects: self.focus_rects.iter().map(|r| transform.rect(r)).collect(),
        }
    }

    pub fn with_opposing(self, opposing: Vec<Path>) -> StepRecord {
        StepRecord { opposing, ..self }
    }

    /// Prefixes `outer` to the focus rectangles, keeping the outermost first
    pub fn with_outer_focus(self, outer: &[Rect]) -> StepRecord {
        let mut focus_rects = outer.to_vec();
        focus_rects.extend(self.focus_rects);
        StepRecord {
            focus_rects,
            ..self
        }
    }
}
