//! Notification repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use lostprop_core::error::{AppError, ErrorKind};
use lostprop_core::result::AppResult;
use lostprop_entity::notification::Notification;

use crate::store::NotificationStore;

/// Repository for per-user notification rows.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn insert(&self, notification: &Notification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, user_id, kind, report_id, report_name, message, \
             status, read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(notification.id)
        .bind(notification.user_id)
        .bind(notification.kind)
        .bind(notification.report_id)
        .bind(&notification.report_name)
        .bind(&notification.message)
        .bind(notification.status)
        .bind(notification.read)
        .bind(notification.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))?;
        Ok(count.max(0) as u64)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
