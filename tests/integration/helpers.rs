//! In-memory host fakes shared by the integration tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::NaiveTime;
use timedisplay::host::{
    Clock, EventSource, HostError, OverlaySurface, StatusSnapshot, StatusSource,
};
use timedisplay::{EventSink, OsdConfig, OverlayController};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SimpleMode,
    Style(String),
    Content(String),
    Show,
    Hide,
}

/// Surface that records every call and can be told to fail.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub calls: Rc<RefCell<Vec<SurfaceCall>>>,
    pub failing: Rc<Cell<bool>>,
}

impl RecordingSurface {
    fn record(&self, call: SurfaceCall) -> Result<(), HostError> {
        if self.failing.get() {
            return Err(HostError::NotReady);
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }

    /// Content payloads pushed so far.
    pub fn contents(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Content(markup) => Some(markup.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_call(&self) -> Option<SurfaceCall> {
        self.calls.borrow().last().cloned()
    }
}

impl OverlaySurface for RecordingSurface {
    fn simple_mode(&mut self) -> Result<(), HostError> {
        self.record(SurfaceCall::SimpleMode)
    }
    fn set_style(&mut self, css: &str) -> Result<(), HostError> {
        self.record(SurfaceCall::Style(css.to_string()))
    }
    fn set_content(&mut self, markup: &str) -> Result<(), HostError> {
        self.record(SurfaceCall::Content(markup.to_string()))
    }
    fn show(&mut self) -> Result<(), HostError> {
        self.record(SurfaceCall::Show)
    }
    fn hide(&mut self) -> Result<(), HostError> {
        self.record(SurfaceCall::Hide)
    }
}

/// Status source returning whatever snapshot the test sets.
#[derive(Clone, Default)]
pub struct ScriptedStatus {
    pub snapshot: Rc<RefCell<StatusSnapshot>>,
    pub failing: Rc<Cell<bool>>,
}

impl ScriptedStatus {
    pub fn set(&self, snapshot: StatusSnapshot) {
        *self.snapshot.borrow_mut() = snapshot;
    }
}

impl StatusSource for ScriptedStatus {
    fn status(&self) -> Result<StatusSnapshot, HostError> {
        if self.failing.get() {
            return Err(HostError::Unavailable { what: "status" });
        }
        Ok(self.snapshot.borrow().clone())
    }
}

/// Clock advanced by hand.
#[derive(Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
    wall: Rc<Cell<NaiveTime>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
            wall: Rc::new(Cell::new(NaiveTime::from_hms_opt(21, 15, 0).unwrap())),
        }
    }

    pub fn advance(&self, secs: f64) {
        self.offset
            .set(self.offset.get() + Duration::from_secs_f64(secs));
    }

    pub fn set_wall(&self, time: NaiveTime) {
        self.wall.set(time);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
    fn wall_clock(&self) -> NaiveTime {
        self.wall.get()
    }
}

/// A controller wired to fakes, with handles to drive them.
pub struct Harness {
    pub controller: OverlayController,
    pub surface: RecordingSurface,
    pub status: ScriptedStatus,
    pub clock: ManualClock,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(&OsdConfig::default())
    }

    pub fn with_config(config: &OsdConfig) -> Self {
        let surface = RecordingSurface::default();
        let status = ScriptedStatus::default();
        let clock = ManualClock::new();
        let controller = OverlayController::new(
            Box::new(surface.clone()),
            Box::new(status.clone()),
            Box::new(clock.clone()),
            config,
        );
        Self {
            controller,
            surface,
            status,
            clock,
        }
    }
}

/// Snapshot helper with the common fields.
pub fn playing(duration: f64, position: f64) -> StatusSnapshot {
    StatusSnapshot {
        duration: Some(duration),
        position: Some(position),
        paused: Some(false),
        ..Default::default()
    }
}

/// Event source that hands its sink to the test.
#[derive(Clone, Default)]
pub struct SharedEventSource {
    pub sink: Arc<Mutex<Option<EventSink>>>,
}

impl EventSource for SharedEventSource {
    fn subscribe(&mut self, sink: EventSink) -> Result<(), HostError> {
        *self.sink.lock().unwrap() = Some(sink);
        Ok(())
    }
}
