//! Real-time change topics.
//!
//! Every write that changes what a subscriber would see bumps one or more
//! topics. Subscribers re-read a full snapshot for the topic they follow.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stream of full-snapshot updates that clients can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "topic", content = "user_id", rename_all = "snake_case")]
pub enum Topic {
    /// Every report in the system (staff view).
    AllReports,
    /// Reports owned by one user.
    UserReports(Uuid),
    /// Notifications addressed to one user.
    UserNotifications(Uuid),
    /// The newest active header banner.
    ActiveBanner,
}

impl Topic {
    /// Whether the topic belongs to a single account.
    pub fn is_per_user(&self) -> bool {
        matches!(self, Self::UserReports(_) | Self::UserNotifications(_))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllReports => write!(f, "reports:all"),
            Self::UserReports(id) => write!(f, "reports:{id}"),
            Self::UserNotifications(id) => write!(f, "notifications:{id}"),
            Self::ActiveBanner => write!(f, "banner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_stable() {
        let id = Uuid::nil();
        assert_eq!(Topic::AllReports.to_string(), "reports:all");
        assert_eq!(
            Topic::UserNotifications(id).to_string(),
            format!("notifications:{id}")
        );
        assert_eq!(Topic::ActiveBanner.to_string(), "banner");
    }

    #[test]
    fn test_per_user_topics() {
        let id = Uuid::new_v4();
        assert!(Topic::UserReports(id).is_per_user());
        assert!(Topic::UserNotifications(id).is_per_user());
        assert!(!Topic::AllReports.is_per_user());
        assert!(!Topic::ActiveBanner.is_per_user());
    }
}
