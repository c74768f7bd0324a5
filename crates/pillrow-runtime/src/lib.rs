#![forbid(unsafe_code)]

//! pillrow runtime.
//!
//! This crate ties the data model and the pure packer into a working
//! layout loop:
//!
//! - [`MeasureRegistry`] - last-reported rendered widths, keyed by pill id
//! - [`WidthThrottle`] - leading-plus-trailing rate limiting of resize
//!   updates (at most one emission per fixed window)
//! - [`WidthObserver`] - owns a [`WidthSource`] subscription and a
//!   latest-wins inbox polled by the host loop
//! - [`PillsEngine`] - the layout coordinator: measure, pack, flatten,
//!   synchronously, before the host presents a frame
//! - [`embed`] - the embedded-frame height negotiation protocol
//!
//! # Role in pillrow
//! `pillrow-runtime` is the orchestrator. Hosts feed it measurements and
//! width updates; it hands back a render sequence of pill-or-break
//! markers. It never renders and never reads ambient globals.
//!
//! [`WidthSource`]: pillrow_core::WidthSource

pub mod embed;
pub mod engine;
pub mod observer;
pub mod registry;
pub mod throttle;

pub use embed::{EmbedContent, EmbedHost, EmbedMessage};
pub use engine::{EngineConfig, PillsEngine};
pub use observer::WidthObserver;
pub use registry::MeasureRegistry;
pub use throttle::{ThrottleConfig, WidthThrottle};
