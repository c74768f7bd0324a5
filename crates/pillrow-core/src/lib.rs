#![forbid(unsafe_code)]

//! Core data model and host-service boundaries for pillrow.
//!
//! This crate defines the types shared by the layout and runtime crates:
//!
//! - [`Pill`] / [`PillId`] - caller-owned pill data with stable identity
//! - [`MeasuredPill`] - ephemeral packing input (id + effective width)
//! - [`Selection`] - caller-owned set of toggled-on pills
//! - [`WidthSource`] - injected, subscribable viewport-width service
//! - [`PillMeasurer`] / [`TextMeasurer`] - host-side width reporting
//!
//! # Role in pillrow
//! `pillrow-core` carries no layout logic and no scheduling. It is the
//! vocabulary the other crates speak: `pillrow-layout` consumes
//! [`MeasuredPill`]s, `pillrow-runtime` consumes a [`WidthSource`] and
//! produces render sequences keyed by [`PillId`].

pub mod measure;
pub mod pill;
pub mod width_source;

pub use measure::{PillMeasurer, TextMeasurer};
pub use pill::{MeasuredPill, Pill, PillId, Selection};
pub use width_source::{SharedWidthSource, WidthListener, WidthSource, WidthSubscription};
