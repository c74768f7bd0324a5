#![forbid(unsafe_code)]

//! Pillrow public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use pillrow_core::measure::{PillMeasurer, TextMeasurer};
pub use pillrow_core::pill::{MeasuredPill, Pill, PillId, Selection};
pub use pillrow_core::width_source::{
    SharedWidthSource, WidthListener, WidthSource, WidthSubscription,
};

// --- Layout re-exports -----------------------------------------------------

pub use pillrow_layout::{LayoutElement, Row, flatten_rows, pack_rows, single_row};

// --- Runtime re-exports ----------------------------------------------------

pub use pillrow_runtime::{
    EmbedContent, EmbedHost, EmbedMessage, EngineConfig, MeasureRegistry, PillsEngine,
    ThrottleConfig, WidthObserver, WidthThrottle,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        EngineConfig, LayoutElement, Pill, PillId, PillMeasurer, PillsEngine, Selection,
        SharedWidthSource, TextMeasurer, ThrottleConfig, WidthObserver, WidthSource,
    };

    pub use crate::{core, layout, runtime};
}

pub use pillrow_core as core;
pub use pillrow_layout as layout;
pub use pillrow_runtime as runtime;
