//! Overlay Layer
//!
//! Page-level resources shared by overlays (scroll lock, key listeners) and
//! the lifecycle that ties a modal's side effects to its open flag.
//!
//! Everything except [`OverlayDocument`] is independent of GPUI and is
//! generic over the context passed to callbacks.

mod document;
mod global;
mod lifecycle;
mod listeners;
mod scroll_lock;

pub use document::*;
pub use global::*;
pub use lifecycle::*;
pub use listeners::*;
pub use scroll_lock::*;
