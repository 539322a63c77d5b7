//! Time sources for the overlay.

use std::time::Instant;

use chrono::{Local, NaiveTime};

/// Monotonic and wall-clock time.
pub trait Clock {
    /// Monotonic instant used to measure elapsed time between ticks.
    fn now(&self) -> Instant;

    /// Local time of day shown in the center region.
    fn wall_clock(&self) -> NaiveTime;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(not(tarpaulin_include))]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall_clock(&self) -> NaiveTime {
        Local::now().time()
    }
}
