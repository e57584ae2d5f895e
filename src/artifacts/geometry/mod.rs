//! Edit graph geometry
//!
//! - `point`: lattice points of the edit graph
//! - `path`: copy-on-write point sequences
//! - `segment`: highlight/candidate edges and focus rectangles
//! - `transform`: flip/translate maps used by the reverse and recursive searches

pub mod path;
pub mod point;
pub mod segment;
pub mod transform;
