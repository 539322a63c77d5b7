//! Messages processed by the runtime loop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::host::{LifecycleEvent, UnknownEvent};

/// Everything that can wake the runtime loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Message {
    /// Host lifecycle notification
    Lifecycle(LifecycleEvent),
    /// Timer tick from the ticker of the given generation
    Tick { generation: u64 },
    /// Stop the loop
    Shutdown,
    /// The last event sink was dropped
    SinksClosed,
}

/// Handle the host uses to deliver lifecycle events.
///
/// Cheap to clone and safe to move to the thread the host calls back on.
/// Dropping the last clone stops the runtime loop, as if `shutdown` had been
/// called.
#[derive(Debug)]
pub struct EventSink {
    tx: Sender<Message>,
    live: Arc<AtomicUsize>,
}

impl EventSink {
    pub(crate) fn new(tx: Sender<Message>, live: Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Self { tx, live }
    }

    /// Deliver a lifecycle event.
    ///
    /// Returns false if the runtime has already stopped.
    pub fn emit(&self, event: LifecycleEvent) -> bool {
        self.tx.send(Message::Lifecycle(event)).is_ok()
    }

    /// Deliver a lifecycle event by its host identifier.
    pub fn emit_named(&self, name: &str) -> Result<bool, UnknownEvent> {
        let event = name.parse::<LifecycleEvent>()?;
        Ok(self.emit(event))
    }

    /// Ask the runtime loop to tear down and return.
    pub fn shutdown(&self) -> bool {
        self.tx.send(Message::Shutdown).is_ok()
    }
}

impl Clone for EventSink {
    fn clone(&self) -> Self {
        Self::new(self.tx.clone(), Arc::clone(&self.live))
    }
}

impl Drop for EventSink {
    fn drop(&mut self) {
        if self.live.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Runtime may already be gone
            let _ = self.tx.send(Message::SinksClosed);
        }
    }
}
