//! Host-facing interfaces.
//!
//! - `status`: playback status snapshots polled every tick
//! - `event`: lifecycle notifications (load, file change, unload)
//! - `surface`: traits for the overlay surface, status source and event registration
//! - `clock`: monotonic and wall-clock time
//! - `error`: host failure taxonomy

mod clock;
mod error;
mod event;
mod status;
mod surface;

pub use clock::{Clock, SystemClock};
pub use error::HostError;
pub use event::{LifecycleEvent, UnknownEvent};
pub use status::StatusSnapshot;
pub use surface::{EventSource, OverlaySurface, StatusSource};
