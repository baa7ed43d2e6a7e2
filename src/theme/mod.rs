//! Theme - Palette and Typography

pub mod colors;
pub mod typography;
