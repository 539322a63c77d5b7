//! Playback status snapshots polled from the host.

use serde_json::Value;

/// One poll of the host's playback status.
///
/// Every field is optional: hosts routinely report nothing while a file is
/// still opening, and scripting bridges may hand over values of the wrong type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    /// Media title from container metadata
    pub title: Option<String>,
    /// File name of the current media
    pub filename: Option<String>,
    /// Total duration in seconds
    pub duration: Option<f64>,
    /// Reported playback position in seconds
    pub position: Option<f64>,
    /// Whether playback is paused
    pub paused: Option<bool>,
}

impl StatusSnapshot {
    /// Read a snapshot from a loosely typed status object.
    ///
    /// Fields with the wrong type, and numbers that are not finite, are
    /// dropped rather than rejected. Anything that is not an object yields an
    /// empty snapshot.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| {
            obj.get(key)
                .and_then(Value::as_f64)
                .filter(|n| n.is_finite())
        };

        Self {
            title: text("title"),
            filename: text("filename"),
            duration: number("duration"),
            position: number("position"),
            paused: obj.get("paused").and_then(Value::as_bool),
        }
    }

    /// Name to show for the current media.
    ///
    /// Prefers a non-empty title, then a non-empty filename.
    pub fn display_name(&self) -> Option<&str> {
        [self.title.as_deref(), self.filename.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
    }

    /// Duration, if it is a positive finite number of seconds.
    pub fn known_duration(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Reported position, if it is a finite number.
    pub fn sampled_position(&self) -> Option<f64> {
        self.position.filter(|p| p.is_finite())
    }

    /// Whether playback is paused. An absent flag counts as playing.
    pub fn is_paused(&self) -> bool {
        self.paused.unwrap_or(false)
    }
}
