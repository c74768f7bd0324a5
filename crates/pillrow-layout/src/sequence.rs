#![forbid(unsafe_code)]

//! Render-sequence flattening.
//!
//! The presentation layer does not consume rows directly; it iterates a
//! flat sequence of pill-or-break markers and emits a line break for
//! each [`LayoutElement::Break`]. The sequence is regenerated wholesale
//! on every layout pass; pill ids are the stable render identity keys
//! that let a presenter preserve per-pill element identity across
//! re-layouts.
//!
//! Convention: breaks are emitted between consecutive rows only. There
//! is no trailing break after the last row, and sequence-equality tests
//! rely on that.

use pillrow_core::{Pill, PillId};

use crate::packer::Row;

/// One element of the flattened render sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutElement {
    /// Render the pill with this id.
    Pill(PillId),
    /// Start a new line; `row` is the index of the row just closed.
    Break {
        /// Index of the completed row preceding this break.
        row: usize,
    },
}

/// Flatten packed rows into a render sequence.
#[must_use]
pub fn flatten_rows(rows: &[Row]) -> Vec<LayoutElement> {
    let pill_count: usize = rows.iter().map(Row::len).sum();
    let mut sequence = Vec::with_capacity(pill_count + rows.len().saturating_sub(1));

    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            sequence.push(LayoutElement::Break { row: index - 1 });
        }
        for pill in row.pills() {
            sequence.push(LayoutElement::Pill(pill.id.clone()));
        }
    }
    sequence
}

/// Fallback sequence used before any measurement exists: every pill in
/// a single implicit row, unbroken, in input order.
#[must_use]
pub fn single_row(pills: &[Pill]) -> Vec<LayoutElement> {
    pills
        .iter()
        .map(|pill| LayoutElement::Pill(pill.id().clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::pack_rows;
    use pillrow_core::MeasuredPill;

    fn pill_id(id: &str) -> LayoutElement {
        LayoutElement::Pill(PillId::from(id))
    }

    #[test]
    fn flatten_interleaves_breaks_between_rows() {
        let rows = pack_rows(
            &[
                MeasuredPill::new("1", 50),
                MeasuredPill::new("2", 60),
                MeasuredPill::new("3", 40),
            ],
            100,
        );

        assert_eq!(
            flatten_rows(&rows),
            vec![
                pill_id("2"),
                LayoutElement::Break { row: 0 },
                pill_id("1"),
                pill_id("3"),
            ]
        );
    }

    #[test]
    fn flatten_single_row_has_no_breaks() {
        let rows = pack_rows(&[MeasuredPill::new("1", 10), MeasuredPill::new("2", 10)], 100);
        let sequence = flatten_rows(&rows);
        assert!(
            sequence
                .iter()
                .all(|el| matches!(el, LayoutElement::Pill(_)))
        );
    }

    #[test]
    fn flatten_empty_rows_is_empty() {
        assert!(flatten_rows(&[]).is_empty());
    }

    #[test]
    fn flatten_numbers_breaks_by_closed_row() {
        let rows = pack_rows(
            &[
                MeasuredPill::new("a", 30),
                MeasuredPill::new("b", 30),
                MeasuredPill::new("c", 30),
            ],
            30,
        );

        let breaks: Vec<usize> = flatten_rows(&rows)
            .iter()
            .filter_map(|el| match el {
                LayoutElement::Break { row } => Some(*row),
                LayoutElement::Pill(_) => None,
            })
            .collect();
        assert_eq!(breaks, [0, 1]);
    }

    #[test]
    fn single_row_preserves_input_order() {
        let pills = vec![
            Pill::new("3", "c"),
            Pill::new("1", "a"),
            Pill::new("2", "b"),
        ];
        assert_eq!(
            single_row(&pills),
            vec![pill_id("3"), pill_id("1"), pill_id("2")]
        );
    }

    #[test]
    fn single_row_of_nothing_is_empty() {
        assert!(single_row(&[]).is_empty());
    }
}
