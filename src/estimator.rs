//! Playback position estimation between host samples.
//!
//! Hosts report the playback position far less often than the overlay
//! redraws. The estimator keeps a virtual position that follows elapsed
//! wall-clock time while playing and snaps back to the host's value whenever
//! a new sample arrives.
//!
//! # Rules
//!
//! - No positive duration: inactive, the virtual position is left alone
//! - New sample (differs from the last one observed): resync to it
//! - Same sample again: extrapolate by elapsed time unless paused
//! - No sample at all: hold
//! - Active results are always clamped to `[0, duration]`

use std::time::Instant;

use crate::host::StatusSnapshot;

/// Result of one estimator update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Duration unknown; the overlay shows its placeholder
    Inactive,
    /// Position estimate within a known duration
    Active {
        /// Total duration in seconds
        duration: f64,
        /// Estimated position in seconds, within `[0, duration]`
        position: f64,
    },
}

impl Estimate {
    /// Seconds left until the end, never negative.
    pub fn remaining(&self) -> Option<f64> {
        match *self {
            Self::Inactive => None,
            Self::Active { duration, position } => Some((duration - position).max(0.0)),
        }
    }
}

/// Virtual playback clock.
#[derive(Debug, Clone, Default)]
pub struct PositionEstimator {
    /// Monotonic instant of the previous update
    last_tick: Option<Instant>,
    /// Last raw position sample seen from the host
    last_observed: Option<f64>,
    /// Current best estimate in seconds
    virtual_position: f64,
}

impl PositionEstimator {
    /// Create an estimator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all history, as on a fresh load.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current virtual position in seconds.
    pub fn virtual_position(&self) -> f64 {
        self.virtual_position
    }

    /// Last position sample observed from the host.
    pub fn last_observed(&self) -> Option<f64> {
        self.last_observed
    }

    /// Update from a snapshot taken at `now`.
    ///
    /// Elapsed time is measured from the previous call; the first call after
    /// a reset counts as zero elapsed so a stale clock never causes a jump.
    pub fn advance(&mut self, snapshot: &StatusSnapshot, now: Instant) -> Estimate {
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.update(snapshot, elapsed)
    }

    /// Update from a snapshot with an explicit elapsed time in seconds.
    pub fn update(&mut self, snapshot: &StatusSnapshot, elapsed_secs: f64) -> Estimate {
        let Some(duration) = snapshot.known_duration() else {
            return Estimate::Inactive;
        };

        if let Some(sample) = snapshot.sampled_position() {
            if self.last_observed != Some(sample) {
                self.virtual_position = sample;
                self.last_observed = Some(sample);
            } else if !snapshot.is_paused() && elapsed_secs.is_finite() {
                self.virtual_position += elapsed_secs.max(0.0);
            }
        }

        self.virtual_position = self.virtual_position.clamp(0.0, duration);
        Estimate::Active {
            duration,
            position: self.virtual_position,
        }
    }
}
