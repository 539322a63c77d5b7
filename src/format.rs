//! Time formatting for the overlay readout.
//!
//! Playback times use `MM:SS`, growing to `H:MM:SS` once an hour is reached.
//! The wall clock always uses 24-hour `HH:MM:SS`.

use chrono::NaiveTime;

/// Seconds in one hour.
const SECS_PER_HOUR: u64 = 3600;

/// Format a playback time in seconds.
///
/// Fractional seconds are truncated. Negative values are treated as zero and
/// non-finite values render as `00:00`.
///
/// # Arguments
/// * `seconds` - Time in seconds
///
/// # Returns
/// `H:MM:SS` when the time reaches one hour (hours unpadded), `MM:SS` otherwise
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / SECS_PER_HOUR;
    let mins = (total_secs % SECS_PER_HOUR) / 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// Parse a time produced by [`format_time`] back into seconds.
///
/// Accepts `MM:SS` and `H:MM:SS`. Minutes and seconds after the leading
/// component must be below 60.
pub fn parse_time(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    let fields: Vec<u64> = parts
        .iter()
        .map(|p| p.parse::<u64>().ok())
        .collect::<Option<_>>()?;

    let total = match fields.as_slice() {
        [m, s] if *s < 60 => m * 60 + s,
        [h, m, s] if *m < 60 && *s < 60 => h * SECS_PER_HOUR + m * 60 + s,
        _ => return None,
    };
    Some(total as f64)
}

/// Format a wall-clock time as 24-hour `HH:MM:SS`.
pub fn format_wall_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
