//! Host lifecycle events.

use std::fmt;
use std::str::FromStr;

/// Namespace prefix the host puts in front of its event identifiers.
const HOST_NAMESPACE: &str = "iina.";

/// Lifecycle notifications delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The extension was loaded into the host
    PluginLoaded,
    /// A new media file finished loading
    FileLoaded,
    /// The extension is being unloaded
    PluginUnloaded,
}

impl LifecycleEvent {
    /// All events the overlay subscribes to.
    pub const ALL: [LifecycleEvent; 3] = [
        LifecycleEvent::PluginLoaded,
        LifecycleEvent::FileLoaded,
        LifecycleEvent::PluginUnloaded,
    ];

    /// Host-side event identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PluginLoaded => "plugin-loaded",
            Self::FileLoaded => "file-loaded",
            Self::PluginUnloaded => "plugin-unloaded",
        }
    }

    /// Whether this event (re)initializes the overlay.
    pub fn triggers_init(&self) -> bool {
        matches!(self, Self::PluginLoaded | Self::FileLoaded)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for event identifiers the overlay does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown lifecycle event: {0}")]
pub struct UnknownEvent(pub String);

impl FromStr for LifecycleEvent {
    type Err = UnknownEvent;

    /// Parse a host event identifier.
    ///
    /// The host's `iina.` namespace is optional, so `iina.file-loaded` and
    /// `file-loaded` are the same event. Other namespaces are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix(HOST_NAMESPACE).unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|event| event.name() == name)
            .ok_or_else(|| UnknownEvent(s.to_string()))
    }
}
