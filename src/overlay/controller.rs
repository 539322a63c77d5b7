//! Init, tick and teardown for the overlay.

use tracing::{debug, info, warn};

use super::state::Visibility;
use crate::config::OsdConfig;
use crate::estimator::{Estimate, PositionEstimator};
use crate::host::{Clock, HostError, OverlaySurface, StatusSnapshot, StatusSource};
use crate::render::{stylesheet, OverlayLayout};

/// Drives the host overlay surface.
///
/// No method returns an error: host failures are logged and the overlay
/// degrades to stale or placeholder content.
pub struct OverlayController {
    surface: Box<dyn OverlaySurface>,
    status: Box<dyn StatusSource>,
    clock: Box<dyn Clock>,
    stylesheet: String,
    estimator: PositionEstimator,
    visibility: Visibility,
}

impl OverlayController {
    /// Create a hidden controller.
    pub fn new(
        surface: Box<dyn OverlaySurface>,
        status: Box<dyn StatusSource>,
        clock: Box<dyn Clock>,
        config: &OsdConfig,
    ) -> Self {
        Self {
            surface,
            status,
            clock,
            stylesheet: stylesheet(&config.style),
            estimator: PositionEstimator::new(),
            visibility: Visibility::Hidden,
        }
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Estimator state.
    pub fn estimator(&self) -> &PositionEstimator {
        &self.estimator
    }

    /// (Re)initialize: reset the estimator, restyle, draw once and show.
    ///
    /// Safe to call while already shown; a file change does exactly that.
    pub fn init(&mut self) {
        info!("Initializing time display overlay");

        self.estimator.reset();
        log_failure("simple_mode", self.surface.simple_mode());
        log_failure("set_style", self.surface.set_style(&self.stylesheet));

        self.visibility = Visibility::Shown;
        self.render();
        log_failure("show", self.surface.show());
    }

    /// Refresh the overlay content.
    ///
    /// Returns the layout that was pushed, or `None` while hidden.
    pub fn tick(&mut self) -> Option<OverlayLayout> {
        if !self.visibility.is_shown() {
            debug!("Ignoring tick while hidden");
            return None;
        }
        Some(self.render())
    }

    /// Hide the overlay. Safe to call while already hidden.
    pub fn teardown(&mut self) {
        if self.visibility.is_shown() {
            info!("Tearing down time display overlay");
        }
        self.visibility = Visibility::Hidden;
        log_failure("hide", self.surface.hide());
    }

    fn render(&mut self) -> OverlayLayout {
        let snapshot = match self.status.status() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Playback status unavailable, showing placeholder");
                StatusSnapshot::default()
            }
        };

        let estimate = self.estimator.advance(&snapshot, self.clock.now());
        if let Estimate::Active { duration, position } = estimate {
            debug!(duration, position, observed = ?self.estimator.last_observed(), "Estimated position");
        }

        let layout = OverlayLayout::build(estimate, self.clock.wall_clock(), snapshot.display_name());
        log_failure("set_content", self.surface.set_content(&layout.to_markup()));
        layout
    }
}

fn log_failure(operation: &'static str, result: Result<(), HostError>) {
    if let Err(e) = result {
        warn!(operation, error = %e, "Overlay surface call failed");
    }
}
