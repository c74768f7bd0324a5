//! Property-based invariant tests for width throttling.
//!
//! For arbitrary bursts of width updates:
//!
//! 1. Rate limit: no two emissions occur closer together than the
//!    configured window.
//! 2. No loss: after a quiet period, the last offered width has always
//!    been emitted (leading or trailing, never dropped).
//! 3. Collapse: a burst inside a single window produces at most two
//!    emissions (the leading value and the final value).

use std::time::{Duration, Instant};

use pillrow_runtime::{ThrottleConfig, WidthThrottle};
use proptest::prelude::*;

const WINDOW_MS: u64 = 100;

// ── Helpers ─────────────────────────────────────────────────────────────

fn throttle() -> WidthThrottle {
    WidthThrottle::new(ThrottleConfig::default().with_window(Duration::from_millis(WINDOW_MS)))
}

/// (offset in ms, width) event streams with non-decreasing offsets.
fn burst_strategy() -> impl Strategy<Value = Vec<(u64, u16)>> {
    prop::collection::vec((0u64..500, 20u16..300), 1..30).prop_map(|mut events| {
        events.sort_by_key(|&(at, _)| at);
        events
    })
}

/// Replay a burst, ticking every millisecond, and collect emissions
/// with their times.
fn replay(events: &[(u64, u16)]) -> Vec<(u64, u16)> {
    let start = Instant::now();
    let mut throttle = throttle();
    let mut emissions = Vec::new();
    let mut next = 0usize;

    let horizon = events.last().map_or(0, |&(at, _)| at) + 2 * WINDOW_MS;
    for ms in 0..=horizon {
        let now = start + Duration::from_millis(ms);
        while next < events.len() && events[next].0 == ms {
            if let Some(width) = throttle.offer_at(events[next].1, now) {
                emissions.push((ms, width));
            }
            next += 1;
        }
        if let Some(width) = throttle.tick_at(now) {
            emissions.push((ms, width));
        }
    }
    emissions
}

proptest! {
    #[test]
    fn emissions_respect_the_window(events in burst_strategy()) {
        let emissions = replay(&events);

        for pair in emissions.windows(2) {
            prop_assert!(
                pair[1].0 - pair[0].0 >= WINDOW_MS,
                "emissions at {}ms and {}ms are closer than the window",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn final_width_is_never_dropped(events in burst_strategy()) {
        let emissions = replay(&events);

        let last_offered = events.last().map(|&(_, width)| width);
        let last_emitted = emissions.last().map(|&(_, width)| width);
        prop_assert_eq!(last_emitted, last_offered);
    }

    #[test]
    fn single_window_burst_collapses(
        widths in prop::collection::vec(20u16..300, 2..20),
    ) {
        // All events inside one window, 1ms apart.
        let events: Vec<(u64, u16)> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| (i as u64, width))
            .collect();
        let emissions = replay(&events);

        // Leading edge plus at most one trailing flush.
        prop_assert!(emissions.len() <= 2);
        prop_assert_eq!(emissions[0].1, events[0].1);
    }
}
