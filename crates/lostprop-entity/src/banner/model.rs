//! Header banner entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::clock::{ClockTime, minute_of_day};

/// A broadcast message shown in the page header during a daily window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HeaderBanner {
    pub id: Uuid,
    pub message: String,
    pub active: bool,
    /// `HH:MM`, inclusive.
    pub start_time: String,
    /// `HH:MM`, inclusive.
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

impl HeaderBanner {
    /// Parsed window, if both ends parse.
    pub fn window(&self) -> Option<(ClockTime, ClockTime)> {
        let start = self.start_time.parse().ok()?;
        let end = self.end_time.parse().ok()?;
        Some((start, end))
    }

    /// Visibility at minute-of-day `minute`.
    ///
    /// Windows crossing midnight (end before start) are never visible.
    pub fn is_visible_at_minute(&self, minute: u16) -> bool {
        if !self.active {
            return false;
        }
        match self.window() {
            Some((start, end)) => start.minutes() <= minute && minute <= end.minutes(),
            None => false,
        }
    }

    /// Visibility at `now` for an office `offset_minutes` east of UTC.
    pub fn is_visible_at(&self, now: DateTime<Utc>, offset_minutes: i32) -> bool {
        self.is_visible_at_minute(minute_of_day(now, offset_minutes))
    }
}

/// Banner creation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBanner {
    pub message: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewBanner {
    pub fn into_banner(self, now: DateTime<Utc>) -> HeaderBanner {
        HeaderBanner {
            id: Uuid::new_v4(),
            message: self.message,
            active: self.active,
            start_time: self.start_time,
            end_time: self.end_time,
            created_at: now,
        }
    }
}

/// What the header shows right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BannerState {
    /// Newest active banner, whether or not it is inside its window.
    pub banner: Option<HeaderBanner>,
    pub visible: bool,
}

impl BannerState {
    /// Evaluate the newest active banner at `now`.
    pub fn evaluate(banner: Option<HeaderBanner>, now: DateTime<Utc>, offset_minutes: i32) -> Self {
        let visible = banner
            .as_ref()
            .is_some_and(|b| b.is_visible_at(now, offset_minutes));
        Self { banner, visible }
    }
}
