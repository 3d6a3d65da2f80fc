//! Event bus for scene telemetry.
//!
//! The scene emits while it steps and flushes once per lifecycle change or
//! frame. Sinks are finalized exactly once, when the run is over.

use std::cell::Cell;
use std::sync::mpsc;

use crate::events::SceneEvent;
use crate::sinks::EventSink;

/// Queues [`SceneEvent`]s and hands them to every sink on [`EventBus::flush`].
///
/// Lifecycle:
/// - open: `emit` queues, `flush` dispatches in registration order
/// - disabled: `emit` drops, anything already queued is discarded
/// - finished: the bus is closed; later events are dropped
pub struct EventBus {
    sender: mpsc::Sender<SceneEvent>,
    receiver: mpsc::Receiver<SceneEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    pending: Cell<usize>,
    dispatched: u64,
    enabled: bool,
    finished: bool,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            pending: Cell::new(0),
            dispatched: 0,
            enabled: true,
            finished: false,
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Disabling discards whatever is still queued.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            let dropped = self.receiver.try_iter().count();
            if dropped > 0 {
                tracing::debug!(dropped, "telemetry disabled with events queued");
            }
            self.pending.set(0);
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True once [`EventBus::finish`] has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Queues an event for the next flush.
    pub fn emit(&self, event: SceneEvent) {
        if !self.enabled || self.finished {
            return;
        }
        // The receiver lives as long as `self`.
        if self.sender.send(event).is_ok() {
            self.pending.set(self.pending.get() + 1);
        }
    }

    /// Events emitted but not yet dispatched.
    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Events dispatched over the bus's lifetime.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Dispatches every queued event; returns how many were sent.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        for event in self.receiver.try_iter() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            count += 1;
        }
        self.pending.set(0);
        self.dispatched += count as u64;
        count
    }

    /// Flushes, finalizes every sink and closes the bus.
    ///
    /// Returns the lifetime dispatch count. Calling it again only returns
    /// the count; sinks are never finalized twice.
    pub fn finish(&mut self) -> u64 {
        if self.finished {
            return self.dispatched;
        }
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
        self.finished = true;
        tracing::debug!(
            dispatched = self.dispatched,
            sinks = self.sinks.len(),
            "telemetry finished"
        );
        self.dispatched
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("sinks", &self.sinks.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("pending", &self.pending.get())
            .field("dispatched", &self.dispatched)
            .field("enabled", &self.enabled)
            .field("finished", &self.finished)
            .finish()
    }
}
