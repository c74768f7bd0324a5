#![forbid(unsafe_code)]

//! Pill data model.
//!
//! A pill is a single selectable tag with a stable string identity and a
//! display label. Pills are owned by the caller and passed down as a
//! read-only list; the engine never mutates them.
//!
//! Identity rules:
//! - [`PillId`] is the only render identity key. Measurement registry
//!   entries and render-sequence elements are keyed by it, never by a
//!   pill's position, so reordering or filtering the pill set cannot
//!   misattribute widths.

use std::collections::HashSet;
use std::fmt;

/// Stable, unique identity of a pill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PillId(String);

impl PillId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PillId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PillId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single selectable tag: stable id plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    id: PillId,
    value: String,
}

impl Pill {
    /// Create a pill.
    pub fn new(id: impl Into<PillId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// The pill's identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &PillId {
        &self.id
    }

    /// The display label.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Packing input: a pill id paired with its effective width.
///
/// The width already includes the selected-decoration allowance, so a
/// pill is packed as if it were toggled on regardless of its actual
/// selection state. Recomputed on every layout pass; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredPill {
    /// Identity of the measured pill.
    pub id: PillId,
    /// Effective width in layout units.
    pub width: u16,
}

impl MeasuredPill {
    /// Create a measured pill.
    pub fn new(id: impl Into<PillId>, width: u16) -> Self {
        Self {
            id: id.into(),
            width,
        }
    }
}

/// Caller-owned set of toggled-on pill ids.
///
/// The layout engine only reads a selection; toggle intents flow upward
/// through the caller's handler, which typically lands in
/// [`Selection::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<PillId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pill with `id` is toggled on.
    #[inline]
    #[must_use]
    pub fn is_selected(&self, id: &PillId) -> bool {
        self.ids.contains(id)
    }

    /// Flip the state of `id`. Returns the new state.
    pub fn toggle(&mut self, id: &PillId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Number of toggled-on pills.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is toggled on.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the toggled-on ids (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &PillId> {
        self.ids.iter()
    }
}
