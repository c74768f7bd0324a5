#![forbid(unsafe_code)]

//! Greedy largest-first row packing.
//!
//! The packer places the widest pills first: a single oversized pill
//! that would otherwise start a new row late cannot strand slack across
//! several rows. Optimal packing is NP-hard and unnecessary here; rows
//! are visually equivalent regardless of fill order, so approximate
//! fullness is enough.
//!
//! # Invariants
//!
//! - Every input pill lands in exactly one row; nothing is dropped or
//!   duplicated.
//! - A row's summed width never exceeds the container width unless the
//!   row holds a single pill wider than the container.
//! - No row is empty.
//! - The sort is stable: pills of equal width keep their input order.
//! - Deterministic: identical inputs yield identical partitions.

use pillrow_core::MeasuredPill;

/// An ordered run of pills laid out on one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pills: Vec<MeasuredPill>,
}

impl Row {
    /// The pills in packed (width-descending) order.
    #[inline]
    #[must_use]
    pub fn pills(&self) -> &[MeasuredPill] {
        &self.pills
    }

    /// Summed width of the row, widened so `u16` inputs cannot overflow.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pills.iter().map(|p| u32::from(p.width)).sum()
    }

    /// Number of pills in the row.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pills.len()
    }

    /// Whether the row holds no pills.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }
}

/// Partition `pills` into rows whose summed width fits `container_width`.
///
/// Pills are stably sorted widest-first, then walked greedily: a pill
/// that would overflow the current row closes it and opens the next.
/// The first pill of a row is always placed, so a pill wider than the
/// container occupies a row alone instead of looping or vanishing.
///
/// Total over any input: the empty list yields zero rows; a container
/// width of zero gives every positive-width pill its own row.
#[must_use]
pub fn pack_rows(pills: &[MeasuredPill], container_width: u16) -> Vec<Row> {
    if pills.is_empty() {
        return Vec::new();
    }

    let mut sorted = pills.to_vec();
    // Stable sort: equal widths keep their input order.
    sorted.sort_by(|a, b| b.width.cmp(&a.width));

    let limit = u32::from(container_width);
    let mut rows = Vec::new();
    let mut current = Row::default();
    let mut current_width: u32 = 0;

    for pill in sorted {
        let width = u32::from(pill.width);
        if !current.is_empty() && current_width + width > limit {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current_width += width;
        current.pills.push(pill);
    }
    rows.push(current);
    rows
}
