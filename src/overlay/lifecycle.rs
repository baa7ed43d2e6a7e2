//! Modal Lifecycle
//!
//! Drives the side effects of a modal from the externally owned open flag.
//! The lifecycle never stores the flag itself: every render calls
//! [`ModalLifecycle::sync`] with the current value and the lifecycle opens or
//! closes its session to match.
//!
//! An open session holds the scroll lock guard and the Escape listener
//! handle, so closing the session, dropping the lifecycle, or unwinding
//! through it all release both.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::document::Document;
use super::listeners::{Key, ListenerHandle};
use super::scroll_lock::ScrollLockGuard;

/// Callback used to ask the owner to close the modal
pub type CloseHandler<C> = Rc<dyn Fn(&mut C)>;

/// Where a pointer-down landed inside an open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed layer itself, not any of its descendants
    Backdrop,
    /// Anything inside the panel (header, body, footer)
    Panel,
    /// The header close affordance
    CloseButton,
}

/// Which pointer targets request a close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    pub close_on_backdrop: bool,
}

impl DismissPolicy {
    pub fn new(close_on_backdrop: bool) -> Self {
        Self { close_on_backdrop }
    }

    pub fn dismisses(self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Backdrop => self.close_on_backdrop,
            PointerTarget::Panel => false,
            PointerTarget::CloseButton => true,
        }
    }
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Result of a [`ModalLifecycle::sync`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

impl Transition {
    /// Whether the document's lock or listeners changed
    pub fn is_change(self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

// Field order matters: the listener goes away before the lock is released.
struct OpenSession<C: 'static> {
    on_close: Rc<RefCell<CloseHandler<C>>>,
    _escape: ListenerHandle<C>,
    _scroll: ScrollLockGuard,
}

/// Persistent side-effect state of one modal instance
pub struct ModalLifecycle<C: 'static> {
    document: Document<C>,
    session: Option<OpenSession<C>>,
}

impl<C: 'static> ModalLifecycle<C> {
    /// Create a closed lifecycle bound to `document`
    pub fn new(document: Document<C>) -> Self {
        Self {
            document,
            session: None,
        }
    }

    /// Reconcile side effects with the current open flag
    ///
    /// Calling this repeatedly with the same flag is a no-op apart from
    /// swapping in the latest close handler. The Escape listener stays
    /// registered across swaps and always calls the latest handler.
    pub fn sync(&mut self, is_open: bool, on_close: CloseHandler<C>) -> Transition {
        if !is_open {
            return match self.session.take() {
                Some(_) => {
                    debug!("Modal closed");
                    Transition::Closed
                }
                None => Transition::Unchanged,
            };
        }

        if let Some(session) = self.session.as_ref() {
            *session.on_close.borrow_mut() = on_close;
            return Transition::Unchanged;
        }

        let on_close = Rc::new(RefCell::new(on_close));
        let scroll = self.document.scroll_lock().acquire();
        let escape = register_close(&self.document, &on_close);
        self.session = Some(OpenSession {
            on_close,
            _escape: escape,
            _scroll: scroll,
        });
        debug!("Modal opened");
        Transition::Opened
    }

    /// Whether this modal currently holds an open session
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The close handler to run for a pointer-down on `target`, if any
    pub fn dismiss_handler(
        &self,
        target: PointerTarget,
        policy: DismissPolicy,
    ) -> Option<CloseHandler<C>> {
        let session = self.session.as_ref()?;
        policy
            .dismisses(target)
            .then(|| session.on_close.borrow().clone())
    }

    /// Route a pointer-down to the close handler, returning whether it ran
    pub fn pointer_down(&self, target: PointerTarget, policy: DismissPolicy, cx: &mut C) -> bool {
        match self.dismiss_handler(target, policy) {
            Some(handler) => {
                handler(cx);
                true
            }
            None => false,
        }
    }

    pub fn document(&self) -> &Document<C> {
        &self.document
    }
}

fn register_close<C: 'static>(
    document: &Document<C>,
    on_close: &Rc<RefCell<CloseHandler<C>>>,
) -> ListenerHandle<C> {
    let slot = Rc::clone(on_close);
    document.keys().register(Key::Escape, move |cx: &mut C| {
        // Released before the call; the handler may re-sync this modal.
        let handler: CloseHandler<C> = slot.borrow().clone();
        handler(cx)
    })
}

impl<C: 'static> Drop for ModalLifecycle<C> {
    fn drop(&mut self) {
        if self.session.take().is_some() {
            debug!("Modal torn down while open");
        }
    }
}

impl<C: 'static> fmt::Debug for ModalLifecycle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalLifecycle")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Host {
        close_requests: usize,
    }

    fn on_close() -> CloseHandler<Host> {
        Rc::new(|host: &mut Host| host.close_requests += 1)
    }

    #[test]
    fn open_then_close_restores_document() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document.clone());
        let handler = on_close();

        assert_eq!(modal.sync(false, handler.clone()), Transition::Unchanged);
        assert_eq!(modal.sync(true, handler.clone()), Transition::Opened);
        assert!(document.is_scroll_locked());
        assert_eq!(document.keys().count(&Key::Escape), 1);

        assert_eq!(modal.sync(false, handler), Transition::Closed);
        assert!(!document.is_scroll_locked());
        assert!(document.keys().is_empty());
    }

    #[test]
    fn repeated_toggles_do_not_stack_listeners() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document.clone());

        for _ in 0..5 {
            modal.sync(true, on_close());
            modal.sync(true, on_close());
            assert_eq!(document.keys().count(&Key::Escape), 1);
            assert_eq!(document.scroll_lock().holders(), 1);
            modal.sync(false, on_close());
        }

        assert!(document.keys().is_empty());
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn rerender_with_new_handler_uses_latest() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document.clone());
        let mut host = Host::default();

        let stale: CloseHandler<Host> = Rc::new(|host: &mut Host| host.close_requests += 100);
        modal.sync(true, stale);
        modal.sync(true, on_close());

        assert_eq!(document.press_key(&Key::Escape, &mut host), 1);
        assert_eq!(host.close_requests, 1);
    }

    #[test]
    fn rerender_while_open_keeps_the_same_listener() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document.clone());

        assert!(modal.sync(true, on_close()).is_change());
        let registered = document.keys().registrations();
        for _ in 0..10 {
            assert!(!modal.sync(true, on_close()).is_change());
        }

        assert_eq!(document.keys().registrations(), registered);
        assert_eq!(document.keys().count(&Key::Escape), 1);
        assert!(modal.sync(false, on_close()).is_change());
    }

    #[test]
    fn closing_another_modal_from_escape_skips_its_handler() {
        let document = Document::<Host>::new();
        let first = Rc::new(RefCell::new(ModalLifecycle::new(document.clone())));
        let second = Rc::new(RefCell::new(ModalLifecycle::new(document.clone())));

        let other = Rc::clone(&second);
        let closes_both: CloseHandler<Host> = Rc::new(move |host: &mut Host| {
            host.close_requests += 1;
            other.borrow_mut().sync(false, Rc::new(|_: &mut Host| {}));
        });
        first.borrow_mut().sync(true, closes_both);
        second
            .borrow_mut()
            .sync(true, Rc::new(|host: &mut Host| host.close_requests += 100));

        let mut host = Host::default();
        assert_eq!(document.press_key(&Key::Escape, &mut host), 1);
        assert_eq!(host.close_requests, 1);
        assert!(!second.borrow().is_active());
        assert_eq!(document.scroll_lock().holders(), 1);
    }

    #[test]
    fn dropping_open_modal_releases_everything() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document.clone());
        modal.sync(true, on_close());
        assert!(document.is_scroll_locked());

        drop(modal);
        assert!(!document.is_scroll_locked());
        assert!(document.keys().is_empty());
    }

    #[test]
    fn lock_held_until_last_modal_closes() {
        let document = Document::<Host>::new();
        let mut first = ModalLifecycle::new(document.clone());
        let mut second = ModalLifecycle::new(document.clone());

        first.sync(true, on_close());
        second.sync(true, on_close());

        first.sync(false, on_close());
        assert!(document.is_scroll_locked());

        drop(second);
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn escape_closes_only_while_open() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document.clone());
        let mut host = Host::default();

        document.press_key(&Key::Escape, &mut host);
        assert_eq!(host.close_requests, 0);

        modal.sync(true, on_close());
        document.press_key(&Key::Escape, &mut host);
        assert_eq!(host.close_requests, 1);

        modal.sync(false, on_close());
        document.press_key(&Key::Escape, &mut host);
        assert_eq!(host.close_requests, 1);
    }

    #[test]
    fn backdrop_ignored_without_close_on_backdrop() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document);
        let mut host = Host::default();
        let policy = DismissPolicy::new(false);

        modal.sync(true, on_close());
        assert!(!modal.pointer_down(PointerTarget::Backdrop, policy, &mut host));
        assert_eq!(host.close_requests, 0);

        assert!(modal.pointer_down(PointerTarget::CloseButton, policy, &mut host));
        assert_eq!(host.close_requests, 1);
    }

    #[test]
    fn backdrop_dismisses_once_and_panel_never() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document);
        let mut host = Host::default();
        let policy = DismissPolicy::new(true);

        modal.sync(true, on_close());
        assert!(modal.pointer_down(PointerTarget::Backdrop, policy, &mut host));
        assert_eq!(host.close_requests, 1);

        assert!(!modal.pointer_down(PointerTarget::Panel, policy, &mut host));
        assert_eq!(host.close_requests, 1);
    }

    #[test]
    fn closed_modal_ignores_pointer() {
        let modal = ModalLifecycle::new(Document::<Host>::new());
        let mut host = Host::default();

        let policy = DismissPolicy::default();
        assert!(!modal.pointer_down(PointerTarget::CloseButton, policy, &mut host));
        assert_eq!(host.close_requests, 0);
    }

    #[test]
    fn confirm_dialog_scenario() {
        let document = Document::<Host>::new();
        let mut modal = ModalLifecycle::new(document.clone());
        let mut host = Host::default();
        let policy = DismissPolicy::new(true);

        modal.sync(true, on_close());

        document.press_key(&Key::from_name("Escape"), &mut host);
        assert_eq!(host.close_requests, 1);

        modal.pointer_down(PointerTarget::Panel, policy, &mut host);
        assert_eq!(host.close_requests, 1);
    }

    #[test]
    fn escape_handler_may_close_its_own_modal() {
        let document = Document::<Host>::new();
        let modal = Rc::new(RefCell::new(ModalLifecycle::new(document.clone())));

        let inner = Rc::clone(&modal);
        let closer: CloseHandler<Host> = Rc::new(move |host: &mut Host| {
            host.close_requests += 1;
            inner.borrow_mut().sync(false, Rc::new(|_: &mut Host| {}));
        });
        modal.borrow_mut().sync(true, closer);

        let mut host = Host::default();
        document.press_key(&Key::Escape, &mut host);

        assert_eq!(host.close_requests, 1);
        assert!(!modal.borrow().is_active());
        assert!(!document.is_scroll_locked());
        assert!(document.keys().is_empty());
    }
}
