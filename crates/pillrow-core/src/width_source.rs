#![forbid(unsafe_code)]

//! Injected viewport-width service.
//!
//! The engine never reads an ambient global for the host's width.
//! Instead it is handed a [`WidthSource`]: a queryable current value
//! plus a subscribe/unsubscribe mechanism, so the source can be faked
//! deterministically in tests.
//!
//! Listener lifecycle is a resource-ownership invariant: every
//! registered listener is unregistered when its [`WidthSubscription`]
//! guard drops, so repeated mount/unmount cycles cannot leak.
//!
//! # Threading
//! Sources and listeners live on the single cooperative event-loop
//! thread that drives layout; nothing here is `Send`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Callback invoked with each raw (unthrottled) width update.
pub type WidthListener = Box<dyn FnMut(u16)>;

/// A queryable, subscribable viewport-width value.
pub trait WidthSource {
    /// Latest known width, or `None` if the host cannot report one.
    ///
    /// A source that returns `None` simply never notifies; this is not
    /// an error condition.
    fn current(&self) -> Option<u16>;

    /// Register a listener for raw width updates.
    ///
    /// The returned guard unregisters the listener when dropped.
    fn subscribe(&self, listener: WidthListener) -> WidthSubscription;
}

type ListenerId = u64;

#[derive(Default)]
struct SharedInner {
    width: Option<u16>,
    listeners: Vec<(ListenerId, WidthListener)>,
    /// Ids unsubscribed but not yet purged (possibly mid-notification).
    dead: Vec<ListenerId>,
    next_id: ListenerId,
}

impl SharedInner {
    fn purge(&mut self) {
        if self.dead.is_empty() {
            return;
        }
        let dead = std::mem::take(&mut self.dead);
        self.listeners.retain(|(id, _)| !dead.contains(id));
    }
}

/// In-process [`WidthSource`] for tests, demos, and embedding hosts.
///
/// Clones share the same underlying value and listener set. Listeners
/// are notified in registration order.
#[derive(Clone, Default)]
pub struct SharedWidthSource {
    inner: Rc<RefCell<SharedInner>>,
}

impl SharedWidthSource {
    /// Create a source with no width yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source seeded with an initial width.
    #[must_use]
    pub fn with_width(width: u16) -> Self {
        let source = Self::new();
        source.inner.borrow_mut().width = Some(width);
        source
    }

    /// Publish a new width and notify subscribers in registration order.
    pub fn set_width(&self, width: u16) {
        // Listeners are moved out before being called so a listener may
        // subscribe or unsubscribe reentrantly without a double borrow.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.width = Some(width);
            std::mem::take(&mut inner.listeners)
        };

        for (id, listener) in listeners.iter_mut() {
            if self.inner.borrow().dead.contains(id) {
                continue;
            }
            listener(width);
        }

        let mut inner = self.inner.borrow_mut();
        let added = std::mem::take(&mut inner.listeners);
        inner.listeners = listeners;
        inner.listeners.extend(added);
        inner.purge();
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.purge();
        inner.listeners.len()
    }
}

impl WidthSource for SharedWidthSource {
    fn current(&self) -> Option<u16> {
        self.inner.borrow().width
    }

    fn subscribe(&self, listener: WidthListener) -> WidthSubscription {
        let mut inner = self.inner.borrow_mut();
        inner.purge();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        WidthSubscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Guard for a registered width listener; unregisters on drop.
pub struct WidthSubscription {
    inner: Weak<RefCell<SharedInner>>,
    id: ListenerId,
}

impl Drop for WidthSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.dead.push(self.id);
            inner.purge();
        }
    }
}
