//! Runtime components
//!
//! - `engine`: configuration plus output writer, the receiver of every command
//! - `pager`: `std::io::Write` adapter over the minus pager

pub mod engine;
pub mod pager;
