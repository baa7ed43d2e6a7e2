//! Application Layer
//!
//! Gallery window: app initialization and the root view.

pub mod application;
pub mod gallery;
