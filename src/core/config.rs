use super::constants::*;
use super::easing::Easing;
use super::error::NavError;
use std::time::Duration;

/// Per-navigator tuning. Differences between pages are values here, never
/// separate code paths.
#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub scroll_duration: Duration,
    pub easing: Easing,
    pub settle_delay: Duration,
    pub trigger_offset_px: f64,
    pub wheel_cooldown: Duration,
    pub wheel_threshold: f64,
    pub reveal_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_duration: Duration::from_millis(SCROLL_DURATION_MS),
            easing: Easing::default(),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
            trigger_offset_px: TRIGGER_OFFSET_PX,
            wheel_cooldown: Duration::from_millis(WHEEL_COOLDOWN_MS),
            wheel_threshold: WHEEL_THRESHOLD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
        }
    }
}

impl NavConfig {
    /// Keys accepted by [`NavConfig::apply_override`]. The web layer reads
    /// each one from a `data-nav-<key>` attribute.
    pub const OVERRIDE_KEYS: [&'static str; 7] = [
        "duration-ms",
        "easing",
        "settle-ms",
        "trigger-offset",
        "wheel-cooldown-ms",
        "wheel-threshold",
        "reveal-threshold",
    ];

    /// Parse `value` and store it under `key`. On error the config is left
    /// untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), NavError> {
        let invalid = || NavError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "duration-ms" => self.scroll_duration = parse_millis(value).ok_or_else(invalid)?,
            "easing" => self.easing = value.parse().map_err(|_| invalid())?,
            "settle-ms" => self.settle_delay = parse_millis(value).ok_or_else(invalid)?,
            "trigger-offset" => self.trigger_offset_px = parse_finite(value).ok_or_else(invalid)?,
            "wheel-cooldown-ms" => self.wheel_cooldown = parse_millis(value).ok_or_else(invalid)?,
            "wheel-threshold" => {
                self.wheel_threshold = parse_finite(value)
                    .filter(|v| *v >= 0.0)
                    .ok_or_else(invalid)?
            }
            "reveal-threshold" => {
                self.reveal_threshold = parse_finite(value)
                    .filter(|v| (0.0..=1.0).contains(v))
                    .ok_or_else(invalid)?
            }
            other => return Err(NavError::UnknownConfigKey(other.to_string())),
        }
        Ok(())
    }

    /// Apply every override, collecting failures instead of stopping at the
    /// first one.
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> (Self, Vec<NavError>) {
        let mut errors = Vec::new();
        for (key, value) in overrides {
            if let Err(e) = self.apply_override(key, value) {
                errors.push(e);
            }
        }
        (self, errors)
    }
}

fn parse_millis(s: &str) -> Option<Duration> {
    s.parse::<u64>().ok().map(Duration::from_millis)
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
