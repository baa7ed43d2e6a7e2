//! Colors - Light and Dark Palettes

use gpui::{rgb, rgba, Rgba};
use gpui_component::ThemeMode;

/// Resolved color palette for one theme mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Rgba,
    pub primary_dark: Rgba,
    pub secondary: Rgba,
    pub secondary_dark: Rgba,
    pub error: Rgba,
    pub error_dark: Rgba,
    pub on_accent: Rgba,
    pub transparent: Rgba,

    pub surface: Rgba,
    pub text: Rgba,
    pub text_muted: Rgba,
    pub text_subtle: Rgba,
    pub text_subtle_hover: Rgba,
    pub border: Rgba,
    pub ghost_hover: Rgba,
    pub focus_ring: Rgba,

    pub input_bg: Rgba,
    pub input_border: Rgba,
    pub input_placeholder: Rgba,

    pub backdrop: Rgba,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            primary: rgb(0x2563eb),
            primary_dark: rgb(0x1d4ed8),
            secondary: rgb(0x7c3aed),
            secondary_dark: rgb(0x6d28d9),
            error: rgb(0xef4444),
            error_dark: rgb(0xdc2626),
            on_accent: rgb(0xffffff),
            transparent: rgba(0x00000000),

            surface: rgb(0xffffff),
            text: rgb(0x111827),
            text_muted: rgb(0x6b7280),
            text_subtle: rgb(0x9ca3af),
            text_subtle_hover: rgb(0x4b5563),
            border: rgb(0xe5e7eb),
            ghost_hover: rgb(0xf3f4f6),
            focus_ring: rgb(0x2563eb),

            input_bg: rgb(0xffffff),
            input_border: rgb(0xd1d5db),
            input_placeholder: rgb(0x9ca3af),

            backdrop: rgba(0x00000080),
        }
    }

    pub fn dark() -> Self {
        Self {
            surface: rgb(0x111827),
            text: rgb(0xf9fafb),
            text_muted: rgb(0x9ca3af),
            text_subtle_hover: rgb(0xd1d5db),
            border: rgb(0x374151),
            ghost_hover: rgb(0x1f2937),

            input_bg: rgb(0x1f2937),
            input_border: rgb(0x4b5563),
            input_placeholder: rgb(0x6b7280),
            ..Self::light()
        }
    }

    /// Palette for a theme mode
    pub fn for_mode(mode: &ThemeMode) -> Self {
        if matches!(mode, ThemeMode::Dark) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
