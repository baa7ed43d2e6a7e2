//! GPUI binding for the document host

use gpui::{App, Global};

use super::document::Document;
use super::listeners::Key;

/// The application's document host, installed as a GPUI global
#[derive(Default)]
pub struct OverlayDocument(Document<App>);

impl Global for OverlayDocument {}

impl OverlayDocument {
    /// Install a fresh document host
    pub fn init(cx: &mut App) {
        cx.set_global(Self::default());
    }

    /// Shared handle to the document, creating the global on first use
    pub fn document(cx: &mut App) -> Document<App> {
        cx.default_global::<Self>().0.clone()
    }

    /// Forward a key-down from the root view to the document listeners
    pub fn dispatch_key(key: &str, cx: &mut App) -> usize {
        let document = Self::document(cx);
        document.press_key(&Key::from_name(key), cx)
    }

    /// Whether any open overlay currently holds the scroll lock
    pub fn scroll_locked(cx: &App) -> bool {
        cx.try_global::<Self>()
            .is_some_and(|global| global.0.is_scroll_locked())
    }
}
