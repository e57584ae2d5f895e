//! Linear-space divide and conquer
//!
//! Each sub-problem is solved by finding its middle snake and recursing on the
//! rectangles before and after it. Sub-problems work in their own coordinates; a
//! composed translation maps every record and path back to the top-level grid
//! before it leaves the sub-problem.

use crate::artifacts::diff::config::{DiffConfig, DiffInput};
use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::middle_snake::middle_snake;
use crate::artifacts::diff::step_record::StepRecord;
use crate::artifacts::geometry::path::Path;
use crate::artifacts::geometry::point::Point;
use crate::artifacts::geometry::segment::{Rect, Segment};
use crate::artifacts::geometry::transform::Transform;
use crate::artifacts::tagged::TaggedString;

#[derive(Debug, Clone)]
pub struct BidirectionalOutcome {
    pub trace: Vec<StepRecord>,
    /// Assembled path from `(0, 0)` to `(N, M)`
    pub path: Path,
    pub tagged: TaggedString,
    pub edit_script_length: usize,
}

impl BidirectionalOutcome {
    pub fn edit_script(&self) -> Vec<Edit<char>> {
        self.tagged.edit_script()
    }
}

struct Solved {
    trace: Vec<StepRecord>,
    path: Path,
    edit_script_length: usize,
}

pub fn compute_bidirectional_trace(input: &DiffInput, config: &DiffConfig) -> BidirectionalOutcome {
    let (old, new) = (input.old_chars(), input.new_chars());
    let solved = solve(old, new, &Transform::identity(), &[], config.parallel);

    BidirectionalOutcome {
        tagged: TaggedString::reconstruct(&solved.path, old, new),
        trace: solved.trace,
        path: solved.path,
        edit_script_length: solved.edit_script_length,
    }
}

/// Solves `old` x `new` in local coordinates, returning records and path mapped by `transform`
fn solve(
    old: &[char],
    new: &[char],
    transform: &Transform,
    focus: &[Rect],
    parallel: bool,
) -> Solved {
    if old.is_empty() || new.is_empty() {
        return straight(old, new, transform, focus);
    }

    let snake = middle_snake(old, new);
    let mut trace = snake
        .trace
        .iter()
        .map(|record| record.transformed(transform).with_outer_focus(focus))
        .collect::<Vec<_>>();

    if snake.edit_script_length <= 1 {
        return Solved {
            trace,
            path: transform.path(&snake.witness),
            edit_script_length: snake.edit_script_length,
        };
    }

    let (before, after) = (snake.start(), snake.end());
    let corner = Point::new(new.len() as isize, old.len() as isize);
    debug_log!(
        "splitting {} at snake {} -> {} (length {})",
        transform.rect(&Rect::spanning(Point::ORIGIN, corner)).max,
        transform.point(before),
        transform.point(after),
        snake.edit_script_length
    );

    let before_focus = nested(focus, transform.rect(&Rect::spanning(Point::ORIGIN, before)));
    let after_focus = nested(focus, transform.rect(&Rect::spanning(after, corner)));
    let after_transform = Transform::translate(after).then(transform);

    let solve_before = || {
        solve(
            &old[..before.y as usize],
            &new[..before.x as usize],
            transform,
            &before_focus,
            parallel,
        )
    };
    let solve_after = || {
        solve(
            &old[after.y as usize..],
            &new[after.x as usize..],
            &after_transform,
            &after_focus,
            parallel,
        )
    };

    let (head, tail) = if parallel {
        rayon::join(solve_before, solve_after)
    } else {
        (solve_before(), solve_after())
    };

    debug_assert_eq!(
        head.edit_script_length + tail.edit_script_length,
        snake.edit_script_length
    );

    let path = head
        .path
        .concat(&transform.path(&snake.path))
        .concat(&tail.path);
    trace.extend(head.trace);
    trace.extend(tail.trace);

    Solved {
        trace,
        path,
        edit_script_length: snake.edit_script_length,
    }
}

fn nested(focus: &[Rect], inner: Rect) -> Vec<Rect> {
    let mut rects = focus.to_vec();
    rects.push(inner);
    rects
}

/// A sub-problem with an empty side: all insertions or all deletions, one record per move
fn straight(old: &[char], new: &[char], transform: &Transform, focus: &[Rect]) -> Solved {
    let (dx, dy) = if old.is_empty() { (1, 0) } else { (0, 1) };
    let moves = old.len() + new.len();

    let mut path = Path::start(Point::ORIGIN);
    let mut trace = Vec::with_capacity(moves);
    for _ in 0..moves {
        let from = path.end();
        let to = from.moved(dx, dy);
        path = path.append(to);

        let segment = Segment::new(from, to);
        let local = StepRecord {
            diagonal: to.diagonal(),
            endpoints: vec![path.clone()],
            opposing: Vec::new(),
            path: path.clone(),
            tagged: TaggedString::reconstruct(&path, old, new),
            highlights: vec![segment],
            candidates: vec![segment],
            top_level: true,
            reverse: false,
            focus_rects: Vec::new(),
        };
        trace.push(local.transformed(transform).with_outer_focus(focus));
    }

    Solved {
        trace,
        path: transform.path(&path),
        edit_script_length: moves,
    }
}
