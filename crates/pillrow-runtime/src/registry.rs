#![forbid(unsafe_code)]

//! Width measurement registry.
//!
//! After each render the host reports the actual on-screen width of
//! every mounted pill. The registry keeps the last report per pill id;
//! it is rebuilt incrementally as pills mount and never needs explicit
//! clearing, because every pill in the current set re-registers on
//! every render.
//!
//! Stale entries for removed pills are tolerated: the coordinator only
//! reads ids present in the current pill set. A pill with no entry yet
//! (first paint) is excluded from that pass's packing input; it is
//! never treated as width zero.

use std::collections::HashMap;

use pillrow_core::PillId;

/// Last-reported rendered widths, keyed by pill identity.
#[derive(Debug, Clone, Default)]
pub struct MeasureRegistry {
    widths: HashMap<PillId, u16>,
    records: u64,
}

impl MeasureRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rendered width of a pill in its current visual state.
    ///
    /// Overwrites any previous report for the same id.
    pub fn record(&mut self, id: impl Into<PillId>, width: u16) {
        self.widths.insert(id.into(), width);
        self.records += 1;
    }

    /// Last-reported width for `id`, if the pill has ever mounted.
    #[inline]
    #[must_use]
    pub fn get(&self, id: &PillId) -> Option<u16> {
        self.widths.get(id).copied()
    }

    /// Whether `id` has a recorded width.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &PillId) -> bool {
        self.widths.contains_key(id)
    }

    /// Number of distinct pills with a recorded width.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Whether no measurement has arrived yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Total reports received, overwrites included.
    #[inline]
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_is_none_not_zero() {
        let registry = MeasureRegistry::new();
        assert_eq!(registry.get(&PillId::from("1")), None);
        assert!(!registry.contains(&PillId::from("1")));
    }

    #[test]
    fn record_then_get() {
        let mut registry = MeasureRegistry::new();
        registry.record("1", 42);

        assert_eq!(registry.get(&PillId::from("1")), Some(42));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn re_registration_overwrites() {
        let mut registry = MeasureRegistry::new();
        registry.record("1", 42);
        registry.record("1", 58);

        assert_eq!(registry.get(&PillId::from("1")), Some(58));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.records(), 2);
    }

    #[test]
    fn stale_entries_are_kept_but_inert() {
        let mut registry = MeasureRegistry::new();
        registry.record("removed", 42);
        registry.record("kept", 10);

        // No clearing step exists; the stale entry simply goes unread.
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&PillId::from("kept")), Some(10));
    }
}
