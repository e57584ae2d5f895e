//! Myers' edit graph searches
//!
//! This module implements the diff engines and their bookkeeping:
//!
//! - `config`: engine selection and validated inputs
//! - `endpoints`: furthest-reaching path per diagonal
//! - `context`: one greedy search (forward or reverse) emitting step records
//! - `unidirectional`: forward search over the whole edit graph
//! - `middle_snake`: simultaneous forward/reverse search meeting in the middle
//! - `bidirectional`: divide and conquer around middle snakes
//! - `edit`: edit scripts folded from tagged strings
//!
//! ## Debug Logging
//!
//! Build with `--features debug_search` to print outer steps, overlaps and
//! recursive splits to stderr.

/// Macro for debug logging that is enabled with the debug_search feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("forward step {}", step);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_search")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod bidirectional;
pub mod config;
pub mod context;
pub mod edit;
pub mod endpoints;
pub mod middle_snake;
pub mod step_record;
pub mod unidirectional;

#[cfg(test)]
mod test_support;

use crate::artifacts::diff::bidirectional::compute_bidirectional_trace;
use crate::artifacts::diff::config::{DiffConfig, DiffInput, Mode};
use crate::artifacts::diff::step_record::StepRecord;
use crate::artifacts::diff::unidirectional::compute_unidirectional_trace;
use crate::artifacts::geometry::path::Path;
use crate::artifacts::tagged::TaggedString;

/// Result of whichever engine the configuration selects
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    pub mode: Mode,
    pub trace: Vec<StepRecord>,
    pub path: Path,
    pub tagged: TaggedString,
    pub edit_script_length: usize,
}

pub fn compute_diff(input: &DiffInput, config: &DiffConfig) -> DiffOutcome {
    match config.mode {
        Mode::Unidirectional => {
            let outcome = compute_unidirectional_trace(input);
            DiffOutcome {
                mode: config.mode,
                trace: outcome.trace,
                path: outcome.path,
                tagged: outcome.tagged,
                edit_script_length: outcome.edit_script_length,
            }
        }
        Mode::Bidirectional => {
            let outcome = compute_bidirectional_trace(input, config);
            DiffOutcome {
                mode: config.mode,
                trace: outcome.trace,
                path: outcome.path,
                tagged: outcome.tagged,
                edit_script_length: outcome.edit_script_length,
            }
        }
    }
}
