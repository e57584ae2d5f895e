//! Greedy forward search over the whole edit graph
//!
//! Outer step `D` extends every diagonal `-D, -D + 2, ..., D` by one edit plus the
//! longest run of matches (the snake) that follows it. The first diagonal whose
//! path reaches `(N, M)` ends the search and `D` is the edit script length.

use crate::artifacts::diff::config::DiffInput;
use crate::artifacts::diff::context::SearchContext;
use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::endpoints::EndpointStore;
use crate::artifacts::diff::step_record::StepRecord;
use crate::artifacts::geometry::path::Path;
use crate::artifacts::tagged::TaggedString;

#[derive(Debug, Clone)]
pub struct UnidirectionalOutcome {
    pub trace: Vec<StepRecord>,
    /// Final path from `(0, 0)` to `(N, M)`
    pub path: Path,
    pub tagged: TaggedString,
    pub edit_script_length: usize,
}

impl UnidirectionalOutcome {
    pub fn edit_script(&self) -> Vec<Edit<char>> {
        self.tagged.edit_script()
    }
}

/// The forward search, driven one outer step at a time
#[derive(Debug, Clone)]
pub struct UnidirectionalSearch {
    context: SearchContext,
    step: isize,
    max_step: isize,
    finished: Option<(isize, Path)>,
}

impl UnidirectionalSearch {
    pub fn new(input: &DiffInput) -> Self {
        Self::from_chars(input.old_chars(), input.new_chars())
    }

    pub(crate) fn from_chars(old: &[char], new: &[char]) -> Self {
        Self {
            context: SearchContext::forward(old, new),
            step: 0,
            max_step: (old.len() + new.len()) as isize,
            finished: None,
        }
    }

    pub fn store(&self) -> &EndpointStore {
        self.context.store()
    }

    pub fn trace(&self) -> &[StepRecord] {
        self.context.trace()
    }

    /// Index of the next outer step to run
    pub fn next_step(&self) -> isize {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Runs one outer step, returning the final path once `(N, M)` is reached
    pub fn step(&mut self) -> Option<Path> {
        if let Some((_, path)) = &self.finished {
            return Some(path.clone());
        }

        let step = self.step;
        assert!(
            step <= self.max_step,
            "forward search ran past {} steps without reaching the end",
            self.max_step
        );
        debug_log!("forward step {}", step);

        let (width, height) = (self.context.width(), self.context.height());
        for diagonal in (-step..=step).step_by(2) {
            let Some(path) = self.context.extend(step, diagonal, &[]) else {
                continue;
            };

            let end = path.end();
            if end.x >= width && end.y >= height {
                debug_log!("forward search reached {} on diagonal {}", end, diagonal);
                let path = path.trimmed(width, height);
                self.finished = Some((step, path.clone()));
                return Some(path);
            }
        }

        self.step += 1;
        None
    }

    pub fn finish(mut self) -> UnidirectionalOutcome {
        let path = loop {
            if let Some(path) = self.step() {
                break path;
            }
        };

        let edit_script_length = self.finished.as_ref().map_or(0, |(step, _)| *step as usize);
        let tagged =
            TaggedString::reconstruct(&path, self.context.old_chars(), self.context.new_chars());

        UnidirectionalOutcome {
            trace: self.context.drain_trace(),
            path,
            tagged,
            edit_script_length,
        }
    }
}

pub fn compute_unidirectional_trace(input: &DiffInput) -> UnidirectionalOutcome {
    UnidirectionalSearch::new(input).finish()
}

#[cfg(test)]
mod tests {
    use super::{UnidirectionalSearch, compute_unidirectional_trace};
    use crate::artifacts::diff::config::{DiffConfig, DiffInput};
    use crate::artifacts::diff::edit::Edit;
    use crate::artifacts::diff::test_support::dp_distance;
    use pretty_assertions::assert_eq;
    use proptest::proptest;
    use rstest::rstest;
    use std::collections::HashMap;

    fn input(old: &str, new: &str) -> DiffInput {
        DiffInput::try_new(old, new, &DiffConfig::default()).unwrap()
    }

    #[test]
    fn textbook_example_needs_five_edits() {
        let outcome = compute_unidirectional_trace(&input("ABCABBA", "CBABAC"));

        assert_eq!(outcome.edit_script_length, 5);
        assert_eq!(outcome.tagged.old_text(), "ABCABBA");
        assert_eq!(outcome.tagged.new_text(), "CBABAC");
    }

    #[test]
    fn ties_prefer_moving_down() {
        let outcome = compute_unidirectional_trace(&input("a", "b"));

        assert_eq!(
            outcome.edit_script(),
            vec![Edit::Insert { value: 'b' }, Edit::Delete { value: 'a' }]
        );
        assert_eq!(outcome.trace.len(), 4);
        assert!(outcome.trace.iter().all(|record| record.top_level));
        assert_eq!(
            outcome.trace.iter().map(|r| r.diagonal).collect::<Vec<_>>(),
            vec![0, -1, 1, 0]
        );
    }

    #[rstest]
    #[case("", "abc", vec![
        Edit::Insert { value: 'a' },
        Edit::Insert { value: 'b' },
        Edit::Insert { value: 'c' },
    ])]
    #[case("abc", "", vec![
        Edit::Delete { value: 'a' },
        Edit::Delete { value: 'b' },
        Edit::Delete { value: 'c' },
    ])]
    #[case("", "", vec![])]
    fn one_sided_inputs(#[case] old: &str, #[case] new: &str, #[case] expected: Vec<Edit<char>>) {
        let outcome = compute_unidirectional_trace(&input(old, new));

        assert_eq!(outcome.edit_script_length, expected.len());
        assert_eq!(outcome.edit_script(), expected);
    }

    #[test]
    fn stepping_stops_at_the_edit_script_length() {
        let mut search = UnidirectionalSearch::new(&input("abc", "abd"));

        assert!(search.step().is_none());
        assert!(search.step().is_none());
        assert!(search.step().is_some());
        assert!(search.is_finished());
        assert_eq!(search.next_step(), 2);
    }

    proptest! {
        #[test]
        fn edit_script_length_matches_dynamic_programming(
            old in "[abc]{0,12}",
            new in "[abc]{0,12}"
        ) {
            let outcome = compute_unidirectional_trace(&input(&old, &new));

            assert_eq!(outcome.edit_script_length, dp_distance(&old, &new));
            assert_eq!(outcome.path.edit_count(), outcome.edit_script_length);
            assert_eq!(outcome.tagged.old_text(), old);
            assert_eq!(outcome.tagged.new_text(), new);
        }

        #[test]
        fn identical_inputs_keep_everything(text in "[a-z]{0,16}") {
            let outcome = compute_unidirectional_trace(&input(&text, &text));

            assert_eq!(outcome.edit_script_length, 0);
            assert!(outcome.tagged.chars().iter().all(|tagged| tagged.is_kept()));
        }

        #[test]
        fn furthest_reaching_x_never_decreases(
            old in "[ab]{0,10}",
            new in "[ab]{0,10}"
        ) {
            let mut search = UnidirectionalSearch::new(&input(&old, &new));
            let mut furthest: HashMap<isize, isize> = HashMap::new();

            loop {
                let done = search.step().is_some();
                for (diagonal, x) in search.store().frontier() {
                    let previous = furthest.insert(diagonal, x).unwrap_or(isize::MIN);
                    assert!(
                        x >= previous,
                        "diagonal {} went back from {} to {}",
                        diagonal,
                        previous,
                        x
                    );
                }
                if done {
                    break;
                }
            }
        }
    }
}
