//! Notification kind enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a notification was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Side effect of a report review.
    StatusUpdate,
    /// Direct message from staff.
    AdminMessage,
    /// Generated by the system.
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatusUpdate => "status_update",
            Self::AdminMessage => "admin_message",
            Self::System => "system",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
