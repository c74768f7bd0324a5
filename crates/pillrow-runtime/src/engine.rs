#![forbid(unsafe_code)]

//! Layout coordinator.
//!
//! [`PillsEngine`] owns the render-sequence state and runs the
//! measure-pack-flatten cycle. The cycle is synchronous: every trigger
//! completes before the call returns, so a host that relayouts in its
//! post-measure, pre-paint hook never presents a frame of unwrapped
//! pills.
//!
//! Triggers are: the pill set changing, a container width report
//! (first mount or a throttled resize), and an explicit [`relayout`]
//! call from the host's post-measure hook. Toggling a pill is
//! deliberately **not** a trigger: packing widths already include the
//! selected-decoration allowance, so a toggle cannot change the
//! packer's input.
//!
//! Until the container width is known and at least one pill is
//! measured, the engine holds a fallback sequence of all pills in one
//! implicit row so first paint shows everything unwrapped rather than
//! nothing.
//!
//! [`relayout`]: PillsEngine::relayout

use std::fmt;

use pillrow_core::{MeasuredPill, Pill, PillId};
use pillrow_layout::{LayoutElement, flatten_rows, pack_rows, single_row};
use tracing::{debug, trace};

use crate::registry::MeasureRegistry;

/// Tuning knobs for the layout coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Extra width attributed to every pill so an unselected pill is
    /// packed as if it already carried the selected decoration. Keeps a
    /// row from overflowing the instant a user toggles a pill on.
    pub selected_allowance: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            selected_allowance: 24,
        }
    }
}

impl EngineConfig {
    /// Set the selected-decoration allowance.
    #[must_use]
    pub fn with_selected_allowance(mut self, allowance: u16) -> Self {
        self.selected_allowance = allowance;
        self
    }
}

/// Handler invoked with a pill id when the user toggles it.
pub type ToggleHandler = Box<dyn FnMut(&PillId)>;

/// The layout coordinator: owns the render sequence and the feedback
/// loop between measurements and packing.
pub struct PillsEngine {
    pills: Vec<Pill>,
    config: EngineConfig,
    registry: MeasureRegistry,
    container_width: Option<u16>,
    sequence: Vec<LayoutElement>,
    on_toggle: Option<ToggleHandler>,
    /// Completed (non-gated) layout passes.
    passes: u64,
}

impl fmt::Debug for PillsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PillsEngine")
            .field("pills", &self.pills.len())
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("container_width", &self.container_width)
            .field("sequence", &self.sequence.len())
            .field("on_toggle", &self.on_toggle.is_some())
            .field("passes", &self.passes)
            .finish()
    }
}

impl PillsEngine {
    /// Create an engine over `pills`, starting from the single-row
    /// fallback sequence.
    #[must_use]
    pub fn new(pills: Vec<Pill>, config: EngineConfig) -> Self {
        let sequence = single_row(&pills);
        Self {
            pills,
            config,
            registry: MeasureRegistry::new(),
            container_width: None,
            sequence,
            on_toggle: None,
            passes: 0,
        }
    }

    /// Install the toggle-intent handler.
    #[must_use]
    pub fn with_on_toggle(mut self, handler: impl FnMut(&PillId) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// The current pill set.
    #[inline]
    #[must_use]
    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    /// The current render sequence.
    #[inline]
    #[must_use]
    pub fn sequence(&self) -> &[LayoutElement] {
        &self.sequence
    }

    /// Last-reported container content width, if the container mounted.
    #[inline]
    #[must_use]
    pub fn container_width(&self) -> Option<u16> {
        self.container_width
    }

    /// Read access to the measurement registry.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &MeasureRegistry {
        &self.registry
    }

    /// Completed layout passes (gated no-ops excluded).
    #[inline]
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Replace the pill set. Triggers a relayout.
    pub fn set_pills(&mut self, pills: Vec<Pill>) {
        self.pills = pills;
        // Refresh the fallback so an unmounted engine still tracks the
        // new set; a gated relayout below leaves it in place.
        self.sequence = single_row(&self.pills);
        self.relayout();
    }

    /// Report the container's content width (mount or throttled
    /// resize). Triggers a relayout.
    pub fn set_container_width(&mut self, width: u16) {
        self.container_width = Some(width);
        self.relayout();
    }

    /// Record a pill's rendered width in its current visual state.
    ///
    /// Not itself a trigger: hosts report every mounted pill after
    /// paint, then call [`relayout`](Self::relayout) once.
    pub fn record_measurement(&mut self, id: impl Into<PillId>, width: u16) {
        self.registry.record(id, width);
    }

    /// Forward a toggle intent to the caller's handler.
    ///
    /// Never re-packs: the selected-decoration allowance makes packing
    /// widths toggle-invariant, so the render sequence stays untouched.
    pub fn toggle(&mut self, id: &PillId) {
        if let Some(handler) = self.on_toggle.as_mut() {
            handler(id);
        }
    }

    /// Run a layout pass: read measurements, pack, flatten, store.
    ///
    /// Gated until the container width is known, and until at least one
    /// pill of a non-empty set has a measurement; a gated call keeps
    /// the current sequence (on first paint, the fallback).
    pub fn relayout(&mut self) {
        let Some(container) = self.container_width else {
            trace!("relayout skipped: container not mounted");
            return;
        };

        let measured = self.measured_pills();
        if measured.is_empty() && !self.pills.is_empty() {
            trace!("relayout skipped: no measurements yet");
            return;
        }

        let rows = pack_rows(&measured, container);
        debug!(
            container,
            measured = measured.len(),
            total = self.pills.len(),
            rows = rows.len(),
            "layout pass"
        );
        self.sequence = flatten_rows(&rows);
        self.passes += 1;
    }

    /// Packing input for the current pill set, in pill order.
    ///
    /// Pills without a registry entry are excluded for this pass; they
    /// join on the pass after their first measurement arrives.
    fn measured_pills(&self) -> Vec<MeasuredPill> {
        self.pills
            .iter()
            .filter_map(|pill| {
                self.registry.get(pill.id()).map(|width| {
                    MeasuredPill::new(
                        pill.id().clone(),
                        width.saturating_add(self.config.selected_allowance),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pills(ids: &[&str]) -> Vec<Pill> {
        ids.iter().map(|id| Pill::new(*id, format!("tag {id}"))).collect()
    }

    fn sequence_ids(engine: &PillsEngine) -> Vec<String> {
        engine
            .sequence()
            .iter()
            .map(|el| match el {
                LayoutElement::Pill(id) => id.to_string(),
                LayoutElement::Break { row } => format!("break-{row}"),
            })
            .collect()
    }

    /// Engine with a zero allowance so tests can use raw widths.
    fn engine_no_allowance(ids: &[&str]) -> PillsEngine {
        PillsEngine::new(pills(ids), EngineConfig::default().with_selected_allowance(0))
    }

    #[test]
    fn initial_sequence_is_single_implicit_row() {
        let engine = PillsEngine::new(pills(&["1", "2", "3"]), EngineConfig::default());
        assert_eq!(sequence_ids(&engine), ["1", "2", "3"]);
        assert_eq!(engine.passes(), 0);
    }

    #[test]
    fn relayout_gated_until_container_mounts() {
        let mut engine = engine_no_allowance(&["1", "2"]);
        engine.record_measurement("1", 50);
        engine.record_measurement("2", 50);

        engine.relayout();
        assert_eq!(engine.passes(), 0);
        assert_eq!(sequence_ids(&engine), ["1", "2"]);
    }

    #[test]
    fn relayout_gated_until_first_measurement() {
        let mut engine = engine_no_allowance(&["1", "2"]);
        engine.set_container_width(100);

        // Container known, nothing measured: fallback stays.
        assert_eq!(engine.passes(), 0);
        assert_eq!(sequence_ids(&engine), ["1", "2"]);
    }

    #[test]
    fn measure_then_relayout_packs_rows() {
        let mut engine = engine_no_allowance(&["1", "2", "3"]);
        engine.set_container_width(100);
        engine.record_measurement("1", 50);
        engine.record_measurement("2", 60);
        engine.record_measurement("3", 40);
        engine.relayout();

        assert_eq!(engine.passes(), 1);
        assert_eq!(sequence_ids(&engine), ["2", "break-0", "1", "3"]);
    }

    #[test]
    fn allowance_is_added_to_reported_widths() {
        let mut engine =
            PillsEngine::new(pills(&["1", "2"]), EngineConfig::default().with_selected_allowance(24));
        engine.set_container_width(100);
        // Raw widths fit together (40+40 <= 100) but effective widths
        // (64+64) do not: the allowance must force a break.
        engine.record_measurement("1", 40);
        engine.record_measurement("2", 40);
        engine.relayout();

        assert_eq!(sequence_ids(&engine), ["1", "break-0", "2"]);
    }

    #[test]
    fn unmeasured_pill_excluded_until_it_reports() {
        let mut engine = engine_no_allowance(&["1", "2"]);
        engine.set_container_width(100);
        engine.record_measurement("1", 30);
        engine.relayout();

        // "2" has never mounted: left out of this pass, no crash.
        assert_eq!(sequence_ids(&engine), ["1"]);

        engine.record_measurement("2", 30);
        engine.relayout();
        assert_eq!(sequence_ids(&engine), ["1", "2"]);
    }

    #[test]
    fn resize_triggers_synchronous_repack() {
        let mut engine = engine_no_allowance(&["1", "2"]);
        engine.set_container_width(100);
        engine.record_measurement("1", 50);
        engine.record_measurement("2", 50);
        engine.relayout();
        assert_eq!(sequence_ids(&engine), ["1", "2"]);

        engine.set_container_width(60);
        assert_eq!(sequence_ids(&engine), ["1", "break-0", "2"]);
    }

    #[test]
    fn set_pills_relayouts_with_known_measurements() {
        let mut engine = engine_no_allowance(&["1", "2"]);
        engine.set_container_width(100);
        engine.record_measurement("1", 30);
        engine.record_measurement("2", 30);
        engine.relayout();

        engine.set_pills(pills(&["2", "1"]));
        // Re-packed from the stale-tolerant registry; both still known.
        assert_eq!(sequence_ids(&engine), ["2", "1"]);
    }

    #[test]
    fn set_pills_before_mount_refreshes_fallback() {
        let mut engine = engine_no_allowance(&["1"]);
        engine.set_pills(pills(&["a", "b"]));
        assert_eq!(sequence_ids(&engine), ["a", "b"]);
        assert_eq!(engine.passes(), 0);
    }

    #[test]
    fn empty_pill_set_packs_to_empty_sequence() {
        let mut engine = engine_no_allowance(&[]);
        engine.set_container_width(100);
        assert_eq!(engine.passes(), 1);
        assert!(engine.sequence().is_empty());
    }

    #[test]
    fn toggle_invokes_handler_with_id() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut engine = PillsEngine::new(pills(&["1", "2"]), EngineConfig::default())
            .with_on_toggle(move |id| log.borrow_mut().push(id.to_string()));

        engine.toggle(&PillId::from("2"));
        engine.toggle(&PillId::from("1"));
        assert_eq!(*seen.borrow(), ["2", "1"]);
    }

    #[test]
    fn toggle_alone_leaves_sequence_untouched() {
        let mut engine = engine_no_allowance(&["1", "2", "3"]).with_on_toggle(|_| {});
        engine.set_container_width(100);
        engine.record_measurement("1", 50);
        engine.record_measurement("2", 60);
        engine.record_measurement("3", 40);
        engine.relayout();

        let before = engine.sequence().to_vec();
        let passes = engine.passes();

        engine.toggle(&PillId::from("2"));
        engine.toggle(&PillId::from("3"));

        assert_eq!(engine.sequence(), before.as_slice());
        assert_eq!(engine.passes(), passes);
    }

    #[test]
    fn relayout_is_idempotent() {
        let mut engine = engine_no_allowance(&["1", "2"]);
        engine.set_container_width(80);
        engine.record_measurement("1", 50);
        engine.record_measurement("2", 50);
        engine.relayout();

        let first = engine.sequence().to_vec();
        engine.relayout();
        assert_eq!(engine.sequence(), first.as_slice());
    }
}
