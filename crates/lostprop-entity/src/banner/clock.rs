//! Wall-clock `HH:MM` values.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use lostprop_core::AppError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Build a clock time, rejecting out-of-range parts.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation(format!("Format waktu tidak valid: '{s}'"));
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Minute of day of `now` in the zone `offset_minutes` east of UTC,
/// always in `0..1440`.
pub fn minute_of_day(now: DateTime<Utc>, offset_minutes: i32) -> u16 {
    let utc = i64::from(now.hour()) * 60 + i64::from(now.minute());
    let local = (utc + i64::from(offset_minutes)).rem_euclid(MINUTES_PER_DAY);
    local as u16
}
