//! Middle snake search
//!
//! A forward search from `(0, 0)` and a reverse search from `(N, M)` advance in
//! lockstep, one outer step `D` each. With `delta = N - M`, the two frontiers can
//! first meet on a forward move when `delta` is odd (edit script length `2D - 1`)
//! and on a reverse move when `delta` is even (length `2D`). The snake of the path
//! that closed the gap is the middle snake.

use crate::artifacts::diff::config::DiffInput;
use crate::artifacts::diff::context::SearchContext;
use crate::artifacts::diff::step_record::StepRecord;
use crate::artifacts::geometry::path::Path;
use crate::artifacts::geometry::point::Point;

#[derive(Debug, Clone)]
pub struct MiddleSnake {
    pub edit_script_length: usize,
    /// The middle snake in forward coordinates; a single point when it has no matches
    pub path: Path,
    /// The on-grid search path whose trailing run is the snake, in forward coordinates
    pub witness: Path,
    /// Whether the overlap was detected by the reverse search
    pub found_in_reverse: bool,
    pub trace: Vec<StepRecord>,
}

pub fn compute_middle_snake(input: &DiffInput) -> MiddleSnake {
    middle_snake(input.old_chars(), input.new_chars())
}

pub(crate) fn middle_snake(old: &[char], new: &[char]) -> MiddleSnake {
    let (width, height) = (new.len() as isize, old.len() as isize);
    let delta = width - height;
    let odd = delta.rem_euclid(2) == 1;

    let mut forward = SearchContext::forward(old, new);
    let mut reverse = SearchContext::reverse(old, new);
    let mut trace = Vec::new();

    for step in 0..=(width + height + 1) / 2 {
        let opposing = reverse.frame_endpoints();
        for diagonal in (-step..=step).step_by(2) {
            let Some(path) = forward.extend(step, diagonal, &opposing) else {
                continue;
            };

            let reverse_diagonal = delta - diagonal;
            if !odd || step == 0 || reverse_diagonal.abs() > step - 1 {
                continue;
            }

            let Some(other) = reverse.store().try_get(reverse_diagonal) else {
                continue;
            };
            let other_end = other.end();
            if other_end.within(width, height) && path.end().x >= width - other_end.x {
                debug_log!(
                    "forward overlap on diagonal {} at step {}: {}",
                    diagonal,
                    step,
                    path.end()
                );
                trace.extend(forward.drain_trace());

                let witness = path.trimmed(width, height);
                return MiddleSnake {
                    edit_script_length: (2 * step - 1) as usize,
                    path: witness.last_snake_suffix(),
                    witness,
                    found_in_reverse: false,
                    trace,
                };
            }
        }
        trace.extend(forward.drain_trace());

        let opposing = forward.frame_endpoints();
        for diagonal in (-step..=step).rev().step_by(2) {
            let Some(path) = reverse.extend(step, diagonal, &opposing) else {
                continue;
            };

            let forward_diagonal = delta - diagonal;
            if odd || forward_diagonal.abs() > step {
                continue;
            }

            let Some(other) = forward.store().try_get(forward_diagonal) else {
                continue;
            };
            let other_end = other.end();
            if other_end.within(width, height) && other_end.x >= width - path.end().x {
                debug_log!(
                    "reverse overlap on diagonal {} at step {}: {}",
                    diagonal,
                    step,
                    path.end()
                );
                trace.extend(reverse.drain_trace());

                let frame = *reverse.frame();
                let local = path.trimmed(width, height);
                return MiddleSnake {
                    edit_script_length: (2 * step) as usize,
                    path: frame.path(&local.last_snake_suffix()),
                    witness: frame.path(&local),
                    found_in_reverse: true,
                    trace,
                };
            }
        }
        trace.extend(reverse.drain_trace());
    }

    panic!(
        "no middle snake between {} old and {} new characters",
        old.len(),
        new.len()
    );
}

impl MiddleSnake {
    pub fn start(&self) -> Point {
        self.path.first()
    }

    pub fn end(&self) -> Point {
        self.path.end()
    }
}
