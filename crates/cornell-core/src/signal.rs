//! Named signals and the dispatching bus
//!
//! The controller owns one `SignalBus`. Subscriptions are registered once,
//! at wiring time, and are never re-bound. Dispatch is queue-based so a
//! handler can re-emit without re-entering the bus.
//!
//! Resize carries a one-shot break: a `Resize` emitted while a `Resize` is
//! already being dispatched is dropped. Without this, an observer that
//! answers a resize by requesting another resize would loop forever.

use crate::content::LayoutMode;

/// Signals exchanged between controller, content and host glue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// The host attached the widget's DOM
    DomAttached,
    /// Layout was re-measured; carries the resulting mode so observers
    /// can react without reaching back into the controller
    Resize {
        layout: LayoutMode,
    },
    /// The container entered fullscreen
    EnterFullscreen,
    /// The container left fullscreen
    ExitFullscreen,
}

/// Handed to handlers so they can emit follow-up signals
pub struct Emitter {
    queue: Vec<Signal>,
    resize_blocked: bool,
    dropped_resizes: usize,
}

impl Emitter {
    /// Queue a follow-up signal.
    ///
    /// A `Resize` queued while a `Resize` dispatch is in flight is dropped.
    pub fn emit(&mut self, signal: Signal) {
        if matches!(signal, Signal::Resize { .. }) && self.resize_blocked {
            self.dropped_resizes += 1;
            return;
        }
        self.queue.push(signal);
    }
}

type Handler = Box<dyn FnMut(Signal, &mut Emitter)>;

/// Signal dispatcher owned by the session controller
#[derive(Default)]
pub struct SignalBus {
    handlers: Vec<Handler>,
    /// Resizes dropped by the re-entrancy break, for diagnostics
    dropped_resizes: usize,
}

impl SignalBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Called once per subscriber, at wiring time.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(Signal, &mut Emitter) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Number of registered handlers
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Resizes dropped so far by the re-entrancy break
    pub fn dropped_resizes(&self) -> usize {
        self.dropped_resizes
    }

    /// Dispatch a signal to every handler, then drain any follow-ups.
    pub fn emit(&mut self, signal: Signal) {
        let mut queue = vec![signal];

        while !queue.is_empty() {
            let current = queue.remove(0);
            let mut emitter = Emitter {
                queue,
                resize_blocked: matches!(current, Signal::Resize { .. }),
                dropped_resizes: 0,
            };

            for handler in &mut self.handlers {
                handler(current, &mut emitter);
            }

            self.dropped_resizes += emitter.dropped_resizes;
            queue = emitter.queue;
        }
    }
}
