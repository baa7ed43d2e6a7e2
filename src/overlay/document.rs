//! Document Host
//!
//! Owns the page-level resources overlays share: the scroll lock and the
//! document key listeners.

use super::listeners::{Key, KeyListeners};
use super::scroll_lock::ScrollLock;

/// Page-level resources shared by every overlay in one window tree
pub struct Document<C: 'static> {
    scroll_lock: ScrollLock,
    keys: KeyListeners<C>,
}

impl<C: 'static> Document<C> {
    pub fn new() -> Self {
        Self {
            scroll_lock: ScrollLock::new(),
            keys: KeyListeners::new(),
        }
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn keys(&self) -> &KeyListeners<C> {
        &self.keys
    }

    /// Whether page scrolling is currently disabled
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Forward a key press to the document listeners
    pub fn press_key(&self, key: &Key, cx: &mut C) -> usize {
        self.keys.dispatch(key, cx)
    }
}

impl<C: 'static> Clone for Document<C> {
    fn clone(&self) -> Self {
        Self {
            scroll_lock: self.scroll_lock.clone(),
            keys: self.keys.clone(),
        }
    }
}

impl<C: 'static> Default for Document<C> {
    fn default() -> Self {
        Self::new()
    }
}
