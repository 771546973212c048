//! Notification inbox operations and staff direct messages.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use lostprop_auth::RbacEnforcer;
use lostprop_core::error::AppError;
use lostprop_core::traits::ChangeNotifier;
use lostprop_core::types::Topic;
use lostprop_database::{NotificationStore, UserStore};
use lostprop_entity::notification::Notification;
use lostprop_entity::user::UserRole;

use crate::context::SessionContext;

/// Addressee of a direct message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipient {
    /// Every citizen account.
    All,
    /// One account.
    User(Uuid),
}

/// Result of a direct message fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SendOutcome {
    pub sent: usize,
    pub failed: usize,
}

/// Manages notification inboxes.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationStore>,
    users: Arc<dyn UserStore>,
    rbac: Arc<RbacEnforcer>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        notifications: Arc<dyn NotificationStore>,
        users: Arc<dyn UserStore>,
        rbac: Arc<RbacEnforcer>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        Self {
            notifications,
            users,
            rbac,
            notifier,
        }
    }

    /// The caller's notifications, newest first.
    pub async fn list(&self, ctx: &SessionContext) -> Result<Vec<Notification>, AppError> {
        self.notifications.list_for_user(ctx.user_id).await
    }

    /// Number of unread notifications.
    pub async fn unread_count(&self, ctx: &SessionContext) -> Result<u64, AppError> {
        self.notifications.count_unread(ctx.user_id).await
    }

    /// Flip the read flag on one of the caller's notifications.
    pub async fn mark_read(&self, ctx: &SessionContext, id: Uuid) -> Result<(), AppError> {
        if !self.notifications.mark_read(id, ctx.user_id).await? {
            return Err(AppError::not_found("Notifikasi tidak ditemukan"));
        }
        self.notifier.notify(Topic::UserNotifications(ctx.user_id));
        Ok(())
    }

    /// Delete one of the caller's notifications.
    pub async fn delete(&self, ctx: &SessionContext, id: Uuid) -> Result<(), AppError> {
        if !self.notifications.delete(id, ctx.user_id).await? {
            return Err(AppError::not_found("Notifikasi tidak ditemukan"));
        }
        self.notifier.notify(Topic::UserNotifications(ctx.user_id));
        Ok(())
    }

    /// Delete every read notification of the caller.
    ///
    /// One delete per row, issued concurrently. Rows that fail to delete
    /// stay; nothing is rolled back. Returns how many were removed.
    pub async fn delete_all_read(&self, ctx: &SessionContext) -> Result<usize, AppError> {
        let read: Vec<Uuid> = self
            .notifications
            .list_for_user(ctx.user_id)
            .await?
            .into_iter()
            .filter(|n| n.read)
            .map(|n| n.id)
            .collect();

        let results = join_all(
            read.iter()
                .map(|id| self.notifications.delete(*id, ctx.user_id)),
        )
        .await;

        let mut deleted = 0;
        for (id, result) in read.iter().zip(results) {
            match result {
                Ok(true) => deleted += 1,
                Ok(false) => {}
                Err(e) => warn!(notification_id = %id, error = %e, "Failed to delete read notification"),
            }
        }

        if deleted > 0 {
            self.notifier.notify(Topic::UserNotifications(ctx.user_id));
        }
        info!(user_id = %ctx.user_id, deleted, requested = read.len(), "Read notifications cleared");
        Ok(deleted)
    }

    /// Staff direct message to one account or to every citizen.
    ///
    /// Each recipient gets an independent write; partial failure is
    /// reported in the counts, not rolled back.
    pub async fn send(
        &self,
        ctx: &SessionContext,
        recipient: Recipient,
        message: &str,
    ) -> Result<SendOutcome, AppError> {
        self.rbac.require_admin(ctx.role)?;
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::validation("Pesan wajib diisi"));
        }

        let recipients: Vec<Uuid> = match recipient {
            Recipient::User(id) => {
                let user = self
                    .users
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Pengguna tidak ditemukan"))?;
                vec![user.id]
            }
            Recipient::All => self
                .users
                .list_by_role(UserRole::User)
                .await?
                .into_iter()
                .map(|u| u.id)
                .collect(),
        };

        let results = join_all(recipients.iter().map(|user_id| {
            let notification = Notification::admin_message(*user_id, message, ctx.request_time);
            async move { self.notifications.insert(&notification).await }
        }))
        .await;

        let mut outcome = SendOutcome::default();
        for (user_id, result) in recipients.iter().zip(results) {
            match result {
                Ok(_) => {
                    outcome.sent += 1;
                    self.notifier.notify(Topic::UserNotifications(*user_id));
                }
                Err(e) => {
                    outcome.failed += 1;
                    warn!(user_id = %user_id, error = %e, "Failed to deliver direct message");
                }
            }
        }

        info!(
            sender = %ctx.user_id,
            ?recipient,
            sent = outcome.sent,
            failed = outcome.failed,
            "Direct message sent"
        );
        Ok(outcome)
    }
}
