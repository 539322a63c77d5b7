//! Overlay configuration.
//!
//! Hosts may hand over a TOML fragment (for example from their own plugin
//! preferences); every field has a default matching the stock look.

use std::time::Duration;

use serde::Deserialize;

/// Shortest tick interval accepted, in milliseconds.
const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse overlay config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid overlay config: {0}")]
    Invalid(String),
}

/// Top-level overlay configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsdConfig {
    /// Redraw period in milliseconds (default: 500, minimum: 50)
    pub tick_interval_ms: u64,
    /// Visual style of the three text regions
    pub style: StyleConfig,
}

impl Default for OsdConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            style: StyleConfig::default(),
        }
    }
}

impl OsdConfig {
    /// Parse a TOML fragment. Missing fields take their defaults.
    ///
    /// The tick interval is raised to the minimum if set too low.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: OsdConfig = toml::from_str(content)?;
        config.tick_interval_ms = config.tick_interval_ms.max(MIN_TICK_INTERVAL_MS);
        config.style.validate()?;
        Ok(config)
    }

    /// Redraw period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS))
    }
}

/// Style of the overlay regions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Distance from the top and side edges, in pixels
    pub inset_px: u32,
    /// Font size in pixels
    pub font_size_px: u32,
    /// Font weight
    pub font_weight: u32,
    /// CSS font-family list
    pub font_family: String,
    /// Text color (any CSS color)
    pub text_color: String,
    /// Background color of each region (any CSS color)
    pub background_color: String,
    /// Corner radius in pixels
    pub corner_radius_px: u32,
    /// Maximum width of the right region, percent of viewport width
    pub right_max_width_vw: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            inset_px: 24,
            font_size_px: 18,
            font_weight: 600,
            font_family: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif".to_string(),
            text_color: "rgba(255, 255, 255, 0.95)".to_string(),
            background_color: "rgba(0, 0, 0, 0.5)".to_string(),
            corner_radius_px: 6,
            right_max_width_vw: 35,
        }
    }
}

impl StyleConfig {
    /// Check values before they are spliced into a stylesheet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_size_px == 0 {
            return Err(ConfigError::Invalid("font_size_px must be positive".to_string()));
        }
        if !(1..=100).contains(&self.right_max_width_vw) {
            return Err(ConfigError::Invalid(format!(
                "right_max_width_vw must be within 1..=100, got {}",
                self.right_max_width_vw
            )));
        }
        for (name, value) in [
            ("font_family", &self.font_family),
            ("text_color", &self.text_color),
            ("background_color", &self.background_color),
        ] {
            if value.contains(['{', '}', ';']) {
                return Err(ConfigError::Invalid(format!(
                    "{} contains a forbidden character: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
