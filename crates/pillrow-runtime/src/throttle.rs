#![forbid(unsafe_code)]

//! Fixed-window width throttling.
//!
//! Continuous resize gestures produce a stream of width updates far
//! faster than relayout should run. [`WidthThrottle`] rate-limits the
//! stream to at most one emission per window:
//!
//! - **Leading edge**: the first update in a burst emits immediately,
//!   so a lone resize is never delayed.
//! - **Trailing edge**: later updates within the window are coalesced
//!   latest-wins and emitted once the window elapses, so the final
//!   width of a burst is never dropped.
//!
//! This is throttling, not debouncing: a continuous gesture still
//! produces one update per window rather than none until it stops.
//!
//! Every timed method has an `*_at(now)` companion taking an explicit
//! [`Instant`] so tests run deterministically without sleeping.

use std::time::{Duration, Instant};

#[inline]
fn duration_since_or_zero(now: Instant, earlier: Instant) -> Duration {
    now.checked_duration_since(earlier)
        .unwrap_or(Duration::ZERO)
}

/// Configuration for width-update throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Minimum interval between emissions.
    pub window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_millis(100),
        }
    }
}

impl ThrottleConfig {
    /// Set the emission window.
    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }
}

/// Leading-plus-trailing throttle over a stream of width updates.
#[derive(Debug)]
pub struct WidthThrottle {
    window: Duration,
    last_emit: Option<Instant>,
    /// Coalesced update awaiting the trailing edge (latest wins).
    pending: Option<u16>,
}

impl WidthThrottle {
    /// Create a throttle with the given configuration.
    #[must_use]
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            window: config.window,
            last_emit: None,
            pending: None,
        }
    }

    /// Offer a raw width update.
    ///
    /// Returns `Some(width)` if the update emits now (window open),
    /// `None` if it was coalesced into the pending slot.
    pub fn offer(&mut self, width: u16) -> Option<u16> {
        self.offer_at(width, Instant::now())
    }

    /// Offer a raw width update at a specific time (for testing).
    pub fn offer_at(&mut self, width: u16, now: Instant) -> Option<u16> {
        let window_open = match self.last_emit {
            None => true,
            Some(at) => duration_since_or_zero(now, at) >= self.window,
        };

        if window_open {
            self.last_emit = Some(now);
            self.pending = None;
            Some(width)
        } else {
            self.pending = Some(width);
            None
        }
    }

    /// Release the pending update if the window has elapsed.
    ///
    /// Call each loop iteration; returns `Some(width)` at most once per
    /// coalesced burst, carrying the latest offered value.
    pub fn tick(&mut self) -> Option<u16> {
        self.tick_at(Instant::now())
    }

    /// Tick at a specific time (for testing).
    pub fn tick_at(&mut self, now: Instant) -> Option<u16> {
        self.pending?;
        match self.last_emit {
            Some(at) if duration_since_or_zero(now, at) < self.window => None,
            _ => {
                self.last_emit = Some(now);
                self.pending.take()
            }
        }
    }

    /// Whether a coalesced update is waiting for the trailing edge.
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
