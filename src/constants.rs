//! UI Constants
//!
//! Centralized UI constants for consistent layout across the widgets.

/// Spinner shown by loading buttons (embedded asset)
pub const SPINNER_ICON: &str = "icons/spinner.svg";

/// Modal panel maximum widths in pixels (sm / md / lg / xl)
pub const MODAL_WIDTH_SM: f32 = 384.0;
pub const MODAL_WIDTH_MD: f32 = 448.0;
pub const MODAL_WIDTH_LG: f32 = 512.0;
pub const MODAL_WIDTH_XL: f32 = 576.0;

/// Padding around the modal panel inside the backdrop
pub const MODAL_VIEWPORT_PADDING: f32 = 16.0;

/// Padding of the modal header, body and footer sections
pub const MODAL_SECTION_PADDING: f32 = 24.0;

/// Minimum width of a text field that is not full width
pub const INPUT_MIN_WIDTH: f32 = 200.0;

/// Default gallery window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
