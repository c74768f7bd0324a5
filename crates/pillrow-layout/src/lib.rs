#![forbid(unsafe_code)]

//! Row packing and render-sequence flattening.
//!
//! This crate is pure: no I/O, no clocks, no host services. Given
//! measured pills and a container width it computes:
//!
//! - [`pack_rows`] - an ordered partition into [`Row`]s, each fitting
//!   the container width (a single oversized pill still gets a row of
//!   its own rather than being dropped)
//! - [`flatten_rows`] - the [`LayoutElement`] sequence a presentation
//!   layer iterates, with a break marker between consecutive rows
//! - [`single_row`] - the pre-measurement fallback sequence
//!
//! Both functions are total over any input, including the empty list
//! and a container width of zero.

pub mod packer;
pub mod sequence;

pub use packer::{Row, pack_rows};
pub use sequence::{LayoutElement, flatten_rows, single_row};
