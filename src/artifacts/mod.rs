//! Edit graph data structures and algorithms
//!
//! - `geometry`: points, paths, segments and the transforms between coordinate frames
//! - `tagged`: strings annotated with the edit that produced each character
//! - `diff`: Myers' searches (forward, middle snake, divide and conquer)

pub mod diff;
pub mod geometry;
pub mod tagged;
