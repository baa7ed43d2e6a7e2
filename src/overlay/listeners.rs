//! Key Listeners
//!
//! Document-level key listener registry. Registration returns a
//! [`ListenerHandle`]; dropping the handle deregisters the listener.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Keys the overlay layer cares about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Other(String),
}

impl Key {
    /// Parse a platform key name ("escape", "Escape", "esc", ...)
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            other => Key::Other(other.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}

type Callback<C> = Rc<dyn Fn(&mut C)>;

struct Entry<C> {
    id: u64,
    key: Key,
    callback: Callback<C>,
}

struct Registry<C> {
    next_id: u64,
    entries: Vec<Entry<C>>,
}

impl<C> Registry<C> {
    fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

/// Listener registry, generic over the context handed to callbacks
///
/// In the application `C` is `gpui::App`; tests use their own recorder type.
pub struct KeyListeners<C: 'static> {
    registry: Rc<RefCell<Registry<C>>>,
}

impl<C: 'static> KeyListeners<C> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener for `key`
    #[must_use = "the listener is deregistered as soon as the handle is dropped"]
    pub fn register(
        &self,
        key: impl Into<Key>,
        callback: impl Fn(&mut C) + 'static,
    ) -> ListenerHandle<C> {
        let key = key.into();
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        trace!(id, ?key, "Key listener registered");
        registry.entries.push(Entry {
            id,
            key,
            callback: Rc::new(callback),
        });

        ListenerHandle {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Invoke every listener registered for `key`, returning how many ran
    ///
    /// Callbacks are snapshotted first, so a callback may register or drop
    /// listeners (including its own) while the dispatch is running. A listener
    /// dropped by an earlier callback in the same dispatch does not run.
    pub fn dispatch(&self, key: &Key, cx: &mut C) -> usize {
        let snapshot: Vec<(u64, Callback<C>)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| &entry.key == key)
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();

        let mut ran = 0;
        for (id, callback) in snapshot {
            if !self.registry.borrow().contains(id) {
                trace!(id, "Skipping key listener removed during dispatch");
                continue;
            }
            callback(cx);
            ran += 1;
        }
        ran
    }

    /// Number of registrations made over the registry's lifetime
    pub fn registrations(&self) -> u64 {
        self.registry.borrow().next_id
    }

    /// Number of listeners registered for `key`
    pub fn count(&self, key: &Key) -> usize {
        self.registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| &entry.key == key)
            .count()
    }

    /// Total number of registered listeners
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: 'static> Clone for KeyListeners<C> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<C: 'static> Default for KeyListeners<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> fmt::Debug for KeyListeners<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Registration token; deregisters its listener on drop
pub struct ListenerHandle<C: 'static> {
    id: u64,
    registry: Weak<RefCell<Registry<C>>>,
}

impl<C: 'static> Drop for ListenerHandle<C> {
    fn drop(&mut self) {
        // The registry may already be gone when the whole document is torn down.
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
            trace!(id = self.id, "Key listener deregistered");
        }
    }
}

impl<C: 'static> fmt::Debug for ListenerHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle").field("id", &self.id).finish()
    }
}
