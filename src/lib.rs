//! Myers' edit-graph diff with an observable search trace
//!
//! The crate computes minimal edit scripts between two character sequences and records
//! every step of the search so that an external visualizer can replay it.
//!
//! - `artifacts`: geometry, tagged strings and the search engines
//! - `areas`: the `Engine` facade holding configuration and the output writer
//! - `commands`: user-facing operations (`diff`, `trace`, `snake`)

pub mod areas;
pub mod artifacts;
pub mod commands;
