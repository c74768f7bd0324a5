#![forbid(unsafe_code)]

//! Throttled width observation.
//!
//! [`WidthObserver`] bridges a raw [`WidthSource`] to the layout loop.
//! Raw updates land in a latest-wins inbox; the host polls the observer
//! once per loop iteration and receives at most one throttled width per
//! window. Updates arriving between two polls collapse in the inbox, so
//! a batch of resize events can only ever produce a single layout pass
//! with the final value.
//!
//! The observer owns its subscription guard: dropping it unregisters
//! the listener from the source.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use pillrow_core::{WidthSource, WidthSubscription};
use tracing::trace;

use crate::throttle::{ThrottleConfig, WidthThrottle};

/// Watches a [`WidthSource`] and surfaces throttled width updates.
pub struct WidthObserver {
    inbox: Rc<Cell<Option<u16>>>,
    throttle: WidthThrottle,
    _subscription: WidthSubscription,
}

impl WidthObserver {
    /// Subscribe to `source`.
    ///
    /// The source's current width (if it has one) is staged in the
    /// inbox so the first poll reports it without waiting for a resize.
    pub fn new(source: &dyn WidthSource, config: ThrottleConfig) -> Self {
        let inbox = Rc::new(Cell::new(source.current()));
        let sink = Rc::clone(&inbox);
        let subscription = source.subscribe(Box::new(move |width| sink.set(Some(width))));
        Self {
            inbox,
            throttle: WidthThrottle::new(config),
            _subscription: subscription,
        }
    }

    /// Poll for a throttled width update.
    pub fn poll(&mut self) -> Option<u16> {
        self.poll_at(Instant::now())
    }

    /// Poll at a specific time (for testing).
    pub fn poll_at(&mut self, now: Instant) -> Option<u16> {
        if let Some(width) = self.inbox.take()
            && let Some(emitted) = self.throttle.offer_at(width, now)
        {
            trace!(width = emitted, "width update emitted");
            return Some(emitted);
        }
        let trailing = self.throttle.tick_at(now);
        if let Some(width) = trailing {
            trace!(width, "coalesced width update emitted");
        }
        trailing
    }

    /// Whether an update is staged or awaiting the trailing edge.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.inbox.get().is_some() || self.throttle.has_pending()
    }
}
