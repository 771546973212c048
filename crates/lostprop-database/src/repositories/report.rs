//! Report repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use lostprop_core::error::{AppError, ErrorKind};
use lostprop_core::result::AppResult;
use lostprop_entity::report::{Report, ReportStatus};

use crate::store::ReportStore;

/// Repository for report rows. Items and attachments are JSONB columns.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for ReportRepository {
    async fn insert(&self, report: &Report) -> AppResult<Report> {
        sqlx::query_as::<_, Report>(
            "INSERT INTO reports (id, user_id, report_date, status, name, identity_type, \
             national_id, birth_place, birth_date, religion, sex, nationality, occupation, \
             address, phone, lost_at, location_category, city, district, village, location, \
             description, loss_value, destination_office, items, attachments, admin_note, \
             reviewed_at, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29) RETURNING *",
        )
        .bind(report.id)
        .bind(report.user_id)
        .bind(report.report_date)
        .bind(report.status)
        .bind(&report.name)
        .bind(&report.identity_type)
        .bind(&report.national_id)
        .bind(&report.birth_place)
        .bind(report.birth_date)
        .bind(&report.religion)
        .bind(&report.sex)
        .bind(&report.nationality)
        .bind(&report.occupation)
        .bind(&report.address)
        .bind(&report.phone)
        .bind(report.lost_at)
        .bind(&report.location_category)
        .bind(&report.city)
        .bind(&report.district)
        .bind(&report.village)
        .bind(&report.location)
        .bind(&report.description)
        .bind(&report.loss_value)
        .bind(&report.destination_office)
        .bind(&report.items)
        .bind(&report.attachments)
        .bind(&report.admin_note)
        .bind(report.reviewed_at)
        .bind(report.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create report", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    async fn list_by_owner(&self, user_id: Uuid) -> AppResult<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            "SELECT * FROM reports WHERE user_id = $1 ORDER BY report_date DESC, seq DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user reports", e))
    }

    async fn list_all(&self) -> AppResult<Vec<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports ORDER BY report_date DESC, seq DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))
    }

    async fn update_review(
        &self,
        id: Uuid,
        status: ReportStatus,
        note: Option<&str>,
        reviewed_at: DateTime<Utc>,
    ) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>(
            "UPDATE reports SET status = $2, admin_note = $3, reviewed_at = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(note)
        .bind(reviewed_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update report status", e)
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete report", e))?;
        Ok(result.rows_affected() > 0)
    }
}
