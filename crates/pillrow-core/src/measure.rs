#![forbid(unsafe_code)]

//! Host-side pill width reporting.
//!
//! The layout engine trusts externally reported widths; it never
//! measures anything itself. [`PillMeasurer`] is the capability a host
//! implements to produce those reports, and [`TextMeasurer`] is the
//! bundled implementation for text hosts: label display width plus
//! horizontal padding, plus the decoration width when selected.

use unicode_width::UnicodeWidthStr;

use crate::pill::Pill;

/// Produces a pill's rendered width in its given selection state.
pub trait PillMeasurer {
    /// Rendered width of `pill` in layout units, decoration included
    /// when `selected`.
    fn pill_width(&self, pill: &Pill, selected: bool) -> u16;
}

/// Text-based measurer: display width of the label plus padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMeasurer {
    pad_left: u16,
    pad_right: u16,
    selected_extra: u16,
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self {
            pad_left: 1,
            pad_right: 1,
            selected_extra: 24,
        }
    }
}

impl TextMeasurer {
    /// Create a measurer with 1 unit of padding on each side and the
    /// default selected-decoration width of 24 units.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the left/right padding.
    #[must_use]
    pub fn with_padding(mut self, left: u16, right: u16) -> Self {
        self.pad_left = left;
        self.pad_right = right;
        self
    }

    /// Set the extra width rendered only when a pill is selected.
    #[must_use]
    pub fn with_selected_extra(mut self, extra: u16) -> Self {
        self.selected_extra = extra;
        self
    }
}

impl PillMeasurer for TextMeasurer {
    fn pill_width(&self, pill: &Pill, selected: bool) -> u16 {
        let label = u16::try_from(pill.value().width()).unwrap_or(u16::MAX);
        let base = label
            .saturating_add(self.pad_left)
            .saturating_add(self.pad_right);
        if selected {
            base.saturating_add(self.selected_extra)
        } else {
            base
        }
    }
}
