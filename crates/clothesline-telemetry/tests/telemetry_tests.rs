//! Integration tests for clothesline-telemetry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clothesline_telemetry::bus::EventBus;
use clothesline_telemetry::events::{EventKind, SceneEvent};
use clothesline_telemetry::sinks::{EventSink, JsonLinesSink, TracingSink, VecSink};
use clothesline_types::ClothId;

fn added(frame: u64, id: u32, slot: usize) -> SceneEvent {
    SceneEvent::new(
        frame,
        EventKind::ClothAdded {
            cloth: ClothId(id),
            material: "Silk".into(),
            slot,
        },
    )
}

/// Counts `finalize` calls.
struct FinalizeCounter(Arc<AtomicUsize>);

impl EventSink for FinalizeCounter {
    fn handle(&mut self, _event: &SceneEvent) {}

    fn finalize(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "finalize_counter"
    }
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(added(0, 0, 0));
    bus.emit(SceneEvent::new(
        1,
        EventKind::ClothRemoved {
            cloth: ClothId(0),
            slot: 0,
        },
    ));
    assert!(sink.is_empty(), "nothing dispatched before flush");
    assert_eq!(bus.pending(), 2);

    assert_eq!(bus.flush(), 2);
    assert_eq!(bus.pending(), 0);
    assert_eq!(bus.dispatched(), 2);
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].label(), "cloth_added");
    assert_eq!(events[1].frame, 1);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(added(0, 0, 0));
    assert_eq!(bus.pending(), 0);
    assert_eq!(bus.flush(), 0);
    assert!(sink.is_empty());
}

#[test]
fn disabling_discards_queued_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(added(0, 0, 0));
    bus.emit(added(0, 1, 1));
    bus.set_enabled(false);
    bus.set_enabled(true);

    assert_eq!(bus.flush(), 0);
    assert!(sink.is_empty());
    bus.emit(added(1, 2, 2));
    assert_eq!(bus.flush(), 1);
}

#[test]
fn finish_closes_the_bus_once() {
    let finalized = Arc::new(AtomicUsize::new(0));
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.add_sink(Box::new(FinalizeCounter(finalized.clone())));

    bus.emit(added(0, 0, 0));
    assert_eq!(bus.finish(), 1);
    assert!(bus.is_finished());

    bus.emit(added(1, 1, 1));
    assert_eq!(bus.pending(), 0);
    assert_eq!(bus.finish(), 1);
    assert_eq!(finalized.load(Ordering::SeqCst), 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let (a, b) = (VecSink::new(), VecSink::new());
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    assert_eq!(bus.sink_count(), 3);

    for i in 0..4 {
        bus.emit(added(i, i as u32, i as usize));
    }
    assert_eq!(bus.finish(), 4);
    assert_eq!(a.len(), 4);
    assert_eq!(a.events(), b.events());
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SceneEvent::new(
        5,
        EventKind::StepCompleted {
            cloth: ClothId(2),
            dt: 0.05,
            relaxation_error: 1e-4,
            kinetic_energy: 0.5,
            wall_time: 0.001,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"StepCompleted\""));
    let recovered: SceneEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn declined_event_carries_capacity() {
    let event = SceneEvent::new(
        0,
        EventKind::PlacementDeclined {
            material: "Denim".into(),
            capacity: 11,
        },
    );
    assert_eq!(event.label(), "placement_declined");
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"capacity\":11"));
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn json_lines_sink_writes_one_line_per_event() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.handle(&added(0, 0, 0));
    sink.handle(&added(1, 1, 1));
    sink.finalize();
    assert_eq!(sink.written(), 2);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: SceneEvent = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second, added(1, 1, 1));
}

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::default().name(), "tracing_sink");
    assert_eq!(JsonLinesSink::new(Vec::new()).name(), "json_lines_sink");
}
