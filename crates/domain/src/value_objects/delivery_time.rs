//! Delivery time arithmetic and its human-readable rendering

use std::fmt;

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Time needed to cover a distance at a fixed speed
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryTime {
    seconds: f64,
}

impl DeliveryTime {
    /// Compute `(distance_meters / 1000) / speed_kmh * 3600`
    ///
    /// `speed_kmh` must be positive; the mode registry guarantees this.
    #[must_use]
    pub fn from_distance(distance_meters: f64, speed_kmh: f64) -> Self {
        Self {
            seconds: (distance_meters / 1000.0) / speed_kmh * 3600.0,
        }
    }

    /// Duration in seconds
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Render as days/hours, hours/minutes, minutes, or `<1 minute`
    ///
    /// Every component is floored; unit names are always plural.
    #[must_use]
    pub fn format_text(&self) -> String {
        // Negative and NaN inputs floor to zero.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total = self.seconds.max(0.0).floor() as u64;

        let days = total / SECONDS_PER_DAY;
        let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
        let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

        if days >= 1 {
            format!("{days} days, {hours} hours")
        } else if hours >= 1 {
            format!("{hours} hours, {minutes} minutes")
        } else if minutes >= 1 {
            format!("{minutes} minutes")
        } else {
            "<1 minute".to_string()
        }
    }
}

impl fmt::Display for DeliveryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_text())
    }
}
