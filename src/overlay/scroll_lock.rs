//! Scroll Lock
//!
//! Reference-counted page scroll lock shared by every overlay of a document.
//! The page stays locked while at least one [`ScrollLockGuard`] is alive.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Shared scroll lock handle
///
/// Cloning the handle shares the same underlying counter.
#[derive(Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    /// Create a new, unlocked scroll lock
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock, returning a guard that releases it on drop
    #[must_use = "the scroll lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        debug!(holders, "Scroll lock acquired");
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    /// Whether the page is currently locked
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Number of live guards
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders.get())
            .finish()
    }
}

/// Scoped ownership of the scroll lock
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        debug!(holders, "Scroll lock released");
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}
