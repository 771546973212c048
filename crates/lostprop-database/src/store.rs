//! Store traits the service layer is written against.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory one in [`crate::memory`]. Stores are plain persistence:
//! workflow rules such as the terminal-status guard live in the services.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use lostprop_core::result::AppResult;
use lostprop_entity::banner::HeaderBanner;
use lostprop_entity::notification::Notification;
use lostprop_entity::report::{Report, ReportStatus};
use lostprop_entity::user::{User, UserRole};

/// Account persistence.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new account. A duplicate email is a `Conflict`.
    async fn create(&self, user: &User) -> AppResult<User>;

    /// Persist the profile fields and `updated_at` of `user`.
    async fn update_profile(&self, user: &User) -> AppResult<Option<User>>;

    /// All accounts with `role`, oldest first.
    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// All accounts, oldest first.
    async fn list_all(&self) -> AppResult<Vec<User>>;
}

/// Report persistence.
#[async_trait]
pub trait ReportStore: Send + Sync + std::fmt::Debug + 'static {
    async fn insert(&self, report: &Report) -> AppResult<Report>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Report>>;

    /// Reports submitted by `user_id`, newest first.
    async fn list_by_owner(&self, user_id: Uuid) -> AppResult<Vec<Report>>;

    /// Every report, newest first.
    async fn list_all(&self) -> AppResult<Vec<Report>>;

    /// Write a status change. Returns the updated row, or `None` if the
    /// report does not exist. No transition rule is checked here.
    async fn update_review(
        &self,
        id: Uuid,
        status: ReportStatus,
        note: Option<&str>,
        reviewed_at: DateTime<Utc>,
    ) -> AppResult<Option<Report>>;

    /// Delete a report. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Notification persistence.
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug + 'static {
    async fn insert(&self, notification: &Notification) -> AppResult<Notification>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>>;

    /// Notifications addressed to `user_id`, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    /// Number of unread notifications addressed to `user_id`.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<u64>;

    /// Set the read flag. Returns whether the recipient owns such a row.
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> AppResult<bool>;

    /// Delete one notification of `user_id`. Returns whether a row was removed.
    async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool>;
}

/// Header banner persistence.
#[async_trait]
pub trait BannerStore: Send + Sync + std::fmt::Debug + 'static {
    async fn insert(&self, banner: &HeaderBanner) -> AppResult<HeaderBanner>;

    /// The newest active banner. Equal creation times resolve to the one
    /// inserted last.
    async fn latest_active(&self) -> AppResult<Option<HeaderBanner>>;

    /// Up to `limit` banners, newest first.
    async fn list_recent(&self, limit: usize) -> AppResult<Vec<HeaderBanner>>;
}
