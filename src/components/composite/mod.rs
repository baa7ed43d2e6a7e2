//! Composite Components
//!
//! Components built from primitives and overlay state.

pub mod modal;
