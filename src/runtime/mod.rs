//! Single-threaded event loop for the overlay.
//!
//! Lifecycle events from the host and ticks from the timer all arrive on one
//! channel and are handled in order on the thread that calls
//! [`Runtime::run`]. The overlay state is only touched there.
//!
//! Every (re)initialization cancels the running ticker before starting a new
//! one under a fresh generation number. Ticks that were already queued by an
//! older ticker carry a stale generation and are dropped.
//!
//! The loop ends on an explicit shutdown or once every [`EventSink`] handed
//! out by the runtime has been dropped; either way the ticker is cancelled
//! and the overlay hidden before [`Runtime::run`] returns.

mod message;
mod ticker;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::config::OsdConfig;
use crate::host::{EventSource, HostError, LifecycleEvent};
use crate::overlay::OverlayController;

pub(crate) use message::Message;
pub use message::EventSink;
pub use ticker::Ticker;

/// Owns the overlay controller and its timer.
pub struct Runtime {
    controller: OverlayController,
    period: Duration,
    tx: Sender<Message>,
    rx: Receiver<Message>,
    live_sinks: Arc<AtomicUsize>,
    ticker: Option<Ticker>,
    generation: u64,
}

impl Runtime {
    /// Create a runtime around a hidden controller.
    pub fn new(controller: OverlayController, config: &OsdConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            controller,
            period: config.tick_interval(),
            tx,
            rx,
            live_sinks: Arc::default(),
            ticker: None,
            generation: 0,
        }
    }

    /// A sink for delivering lifecycle events to this runtime.
    pub fn sink(&self) -> EventSink {
        EventSink::new(self.tx.clone(), Arc::clone(&self.live_sinks))
    }

    /// Register this runtime with the host's event source.
    pub fn attach(&mut self, source: &mut dyn EventSource) -> Result<(), HostError> {
        source.subscribe(self.sink())
    }

    /// The controller being driven.
    pub fn controller(&self) -> &OverlayController {
        &self.controller
    }

    /// Generation of the current ticker; zero before the first init.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a ticker is currently scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Process messages until a shutdown request or until no event sink is
    /// left, then tear down.
    pub fn run(mut self) {
        // Nobody can deliver events any more; drain what is queued and stop
        if self.live_sinks.load(Ordering::SeqCst) == 0 {
            let _ = self.tx.send(Message::SinksClosed);
        }
        while let Ok(message) = self.rx.recv() {
            if !self.dispatch(message) {
                break;
            }
        }
        self.stop_ticker();
        self.controller.teardown();
    }

    /// Handle one message. Returns false when the loop should stop.
    pub(crate) fn dispatch(&mut self, message: Message) -> bool {
        match message {
            Message::Lifecycle(event) => {
                debug!(%event, "Lifecycle event");
                self.on_lifecycle(event);
            }
            Message::Tick { generation } => {
                if self.ticker.is_some() && generation == self.generation {
                    self.controller.tick();
                } else {
                    debug!(generation, current = self.generation, "Dropping stale tick");
                }
            }
            Message::Shutdown => {
                debug!("Shutdown requested");
                return false;
            }
            Message::SinksClosed => {
                debug!("All event sinks dropped");
                return false;
            }
        }
        true
    }

    fn on_lifecycle(&mut self, event: LifecycleEvent) {
        if event.triggers_init() {
            self.controller.init();
            self.restart_ticker();
        } else {
            self.stop_ticker();
            self.controller.teardown();
        }
    }

    fn restart_ticker(&mut self) {
        self.stop_ticker();
        self.generation += 1;

        let generation = self.generation;
        let tx = self.tx.clone();
        match Ticker::start(self.period, move || tx.send(Message::Tick { generation }).is_ok()) {
            Ok(ticker) => self.ticker = Some(ticker),
            Err(e) => error!(error = %e, "Failed to start overlay timer"),
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
