//! Overlay controller.
//!
//! Owns the estimator and the visibility state, and drives the host surface
//! through the init / tick / teardown cycle.

mod controller;
mod state;

pub use controller::OverlayController;
pub use state::Visibility;
