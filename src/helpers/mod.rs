//! Helper Utilities
//!
//! Common utilities used across the crate.

mod fs;

pub use fs::*;
