//! State Layer
//!
//! Persisted UI settings shared by every widget through a GPUI global.

mod settings;

pub use settings::*;
