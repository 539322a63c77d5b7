//! Traits for the host collaborators the overlay talks to.
//!
//! The overlay never touches the host directly. Everything it reads or
//! pushes goes through these traits so the controller can be driven by
//! in-memory fakes.

use super::error::HostError;
use super::status::StatusSnapshot;
use crate::runtime::EventSink;

/// The host's overlay drawing surface.
pub trait OverlaySurface {
    /// Reset the surface to its plain single-layer mode.
    fn simple_mode(&mut self) -> Result<(), HostError>;

    /// Replace the surface stylesheet.
    fn set_style(&mut self, css: &str) -> Result<(), HostError>;

    /// Replace the surface content.
    fn set_content(&mut self, markup: &str) -> Result<(), HostError>;

    /// Make the surface visible.
    fn show(&mut self) -> Result<(), HostError>;

    /// Hide the surface.
    fn hide(&mut self) -> Result<(), HostError>;
}

/// Read access to the host's playback status.
pub trait StatusSource {
    /// Poll the current status. Treated as instantaneous.
    fn status(&self) -> Result<StatusSnapshot, HostError>;
}

/// Callback registration for host lifecycle events.
///
/// Implementations forward the host's load and unload notifications into
/// the sink, from whatever thread the host delivers them on.
pub trait EventSource {
    /// Start forwarding lifecycle events into `sink`.
    fn subscribe(&mut self, sink: EventSink) -> Result<(), HostError>;
}
