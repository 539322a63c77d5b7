//! Three-region overlay layout.

use chrono::NaiveTime;

use crate::estimator::Estimate;
use crate::format::{format_time, format_wall_clock};

/// Left region text shown while the duration is unknown.
pub const PLACEHOLDER: &str = "00:00 : 00:00 - 00:00";

/// Text for the three overlay regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    /// `duration : elapsed - remaining`
    pub left: String,
    /// Wall clock
    pub center: String,
    /// Media title or filename
    pub right: String,
}

impl OverlayLayout {
    /// Build the layout for one frame.
    ///
    /// # Arguments
    /// * `estimate` - Estimator output for this tick
    /// * `wall_clock` - Local time of day
    /// * `media_name` - Title or filename of the current media, if any
    pub fn build(estimate: Estimate, wall_clock: NaiveTime, media_name: Option<&str>) -> Self {
        Self {
            left: readout(estimate),
            center: format_wall_clock(wall_clock),
            right: media_name.unwrap_or_default().to_string(),
        }
    }

    /// Render the layout as overlay markup.
    ///
    /// Region text is HTML-escaped so media titles cannot inject markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(160 + self.left.len() + self.right.len());
        out.push_str("<div id=\"osd-container\">");
        for (id, text) in [
            ("left", &self.left),
            ("center", &self.center),
            ("right", &self.right),
        ] {
            out.push_str("<div id=\"");
            out.push_str(id);
            out.push_str("\" class=\"osd-item\">");
            push_escaped(&mut out, text);
            out.push_str("</div>");
        }
        out.push_str("</div>");
        out
    }
}

/// Format the playback readout for the left region.
pub fn readout(estimate: Estimate) -> String {
    match estimate {
        Estimate::Inactive => PLACEHOLDER.to_string(),
        Estimate::Active { duration, position } => format!(
            "{} : {} - {}",
            format_time(duration),
            format_time(position),
            format_time(estimate.remaining().unwrap_or_default())
        ),
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
