//! Header banner repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use lostprop_core::error::{AppError, ErrorKind};
use lostprop_core::result::AppResult;
use lostprop_entity::banner::HeaderBanner;

use crate::store::BannerStore;

/// Repository for `header_notifications` rows.
#[derive(Debug, Clone)]
pub struct BannerRepository {
    pool: PgPool,
}

impl BannerRepository {
    /// Create a new banner repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerStore for BannerRepository {
    async fn insert(&self, banner: &HeaderBanner) -> AppResult<HeaderBanner> {
        sqlx::query_as::<_, HeaderBanner>(
            "INSERT INTO header_notifications (id, message, active, start_time, end_time, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(banner.id)
        .bind(&banner.message)
        .bind(banner.active)
        .bind(&banner.start_time)
        .bind(&banner.end_time)
        .bind(banner.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create banner", e))
    }

    async fn latest_active(&self) -> AppResult<Option<HeaderBanner>> {
        sqlx::query_as::<_, HeaderBanner>(
            "SELECT * FROM header_notifications WHERE active = TRUE \
             ORDER BY created_at DESC, seq DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load active banner", e))
    }

    async fn list_recent(&self, limit: usize) -> AppResult<Vec<HeaderBanner>> {
        sqlx::query_as::<_, HeaderBanner>(
            "SELECT * FROM header_notifications ORDER BY created_at DESC, seq DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list banners", e))
    }
}
