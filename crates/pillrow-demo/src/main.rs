#![forbid(unsafe_code)]

//! End-to-end demo: measure a set of pills, pack them into the real
//! terminal width, then replay a simulated resize burst to show the
//! throttled observer coalescing events into layout passes.
//!
//! Run with `RUST_LOG=trace` to watch the observer and engine log each
//! emission and pass.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use pillrow::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const TAGS: &[&str] = &[
    "rust",
    "layout",
    "terminal",
    "responsive design",
    "text measurement",
    "greedy packing",
    "throttling",
    "ui",
];

fn sample_pills() -> Vec<Pill> {
    TAGS.iter()
        .enumerate()
        .map(|(i, value)| Pill::new(format!("tag-{i}"), *value))
        .collect()
}

/// Render the flattened sequence as bracketed pills, one row per line.
fn render(engine: &PillsEngine, selection: &Selection) -> String {
    let mut out = String::new();
    for element in engine.sequence() {
        match element {
            LayoutElement::Pill(id) => {
                let value = engine
                    .pills()
                    .iter()
                    .find(|pill| pill.id() == id)
                    .map_or("?", |pill| pill.value());
                if selection.is_selected(id) {
                    out.push_str(&format!("[*{value}*] "));
                } else {
                    out.push_str(&format!("[{value}] "));
                }
            }
            LayoutElement::Break { .. } => {
                out.push('\n');
            }
        }
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (columns, _rows) = crossterm::terminal::size().unwrap_or((80, 24));
    info!(columns, "starting demo");

    let pills = sample_pills();
    let measurer = TextMeasurer::default();
    let selection = Rc::new(RefCell::new(Selection::new()));

    let toggle_selection = Rc::clone(&selection);
    let mut engine = PillsEngine::new(pills.clone(), EngineConfig::default())
        .with_on_toggle(move |id| {
            toggle_selection.borrow_mut().toggle(id);
        });

    // Hosts report widths in the unselected state; the engine's
    // allowance covers the selected decoration.
    for pill in &pills {
        let width = measurer.pill_width(pill, false);
        engine.record_measurement(pill.id().clone(), width);
    }

    let source = SharedWidthSource::with_width(columns);
    let mut observer = WidthObserver::new(&source, ThrottleConfig::default());

    let start = Instant::now();
    if let Some(width) = observer.poll_at(start) {
        engine.set_container_width(width);
    }
    println!("-- initial layout at width {columns} --");
    println!("{}", render(&engine, &selection.borrow()));

    // Toggle two pills: the selection changes but the sequence must not.
    engine.toggle(&PillId::from("tag-0"));
    engine.toggle(&PillId::from("tag-3"));
    println!("-- after toggling two pills (same rows, new decoration) --");
    println!("{}", render(&engine, &selection.borrow()));

    // A drag-resize burst: one event every 10ms, shrinking the pane.
    // The throttle turns eleven events into a handful of layout passes.
    let passes_before = engine.passes();
    let mut now = start + Duration::from_millis(500);
    for step in 0..=10u16 {
        source.set_width(columns.saturating_sub(step * 4));
        if let Some(width) = observer.poll_at(now) {
            engine.set_container_width(width);
        }
        now += Duration::from_millis(10);
    }
    // Quiet period: the trailing edge flushes the last pending width.
    now += Duration::from_millis(200);
    if let Some(width) = observer.poll_at(now) {
        engine.set_container_width(width);
    }

    let final_width = columns.saturating_sub(40);
    info!(
        events = 11,
        passes = engine.passes() - passes_before,
        "resize burst coalesced"
    );
    println!("-- after resize burst down to width {final_width} --");
    println!("{}", render(&engine, &selection.borrow()));
}
