//! Time display overlay for media player hosts.
//!
//! Draws three text regions over the video: a `duration : elapsed - remaining`
//! readout on the left, the wall clock in the center and the media title on
//! the right. The readout advances smoothly between the host's infrequent
//! position reports.
//!
//! # Architecture
//!
//! - `estimator`: virtual playback position between host samples
//! - `format`: `MM:SS` / `H:MM:SS` and wall-clock formatting
//! - `render`: layout, markup and stylesheet
//! - `overlay`: controller with the init / tick / teardown cycle
//! - `runtime`: event loop, repeating timer and host event sink
//! - `host`: traits the embedding host implements
//! - `config`: overlay configuration
//!
//! # Usage
//!
//! ```no_run
//! use timedisplay::host::{EventSource, OverlaySurface, StatusSource, SystemClock};
//! use timedisplay::{OsdConfig, OverlayController, Runtime};
//!
//! fn start(
//!     surface: Box<dyn OverlaySurface>,
//!     status: Box<dyn StatusSource>,
//!     events: &mut dyn EventSource,
//! ) {
//!     let config = OsdConfig::default();
//!     let controller = OverlayController::new(surface, status, Box::new(SystemClock), &config);
//!     let mut runtime = Runtime::new(controller, &config);
//!     if runtime.attach(events).is_ok() {
//!         runtime.run();
//!     }
//! }
//! ```

pub mod config;
pub mod estimator;
pub mod format;
pub mod host;
pub mod overlay;
pub mod render;
pub mod runtime;

pub use config::{ConfigError, OsdConfig, StyleConfig};
pub use estimator::{Estimate, PositionEstimator};
pub use overlay::{OverlayController, Visibility};
pub use runtime::{EventSink, Runtime, Ticker};
