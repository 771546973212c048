use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use lostprop_core::result::AppResult;
use lostprop_entity::report::{Report, ReportStatus};

use crate::store::ReportStore;

/// In-memory report store.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    rows: RwLock<Vec<Report>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest report date first; later insertion wins ties.
fn newest_first<'a>(rows: impl DoubleEndedIterator<Item = &'a Report>) -> Vec<Report> {
    let mut out: Vec<Report> = rows.rev().cloned().collect();
    out.sort_by(|a, b| b.report_date.cmp(&a.report_date));
    out
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn insert(&self, report: &Report) -> AppResult<Report> {
        self.rows.write().await.push(report.clone());
        Ok(report.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Report>> {
        Ok(self.rows.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_owner(&self, user_id: Uuid) -> AppResult<Vec<Report>> {
        let rows = self.rows.read().await;
        Ok(newest_first(rows.iter().filter(|r| r.user_id == user_id)))
    }

    async fn list_all(&self) -> AppResult<Vec<Report>> {
        let rows = self.rows.read().await;
        Ok(newest_first(rows.iter()))
    }

    async fn update_review(
        &self,
        id: Uuid,
        status: ReportStatus,
        note: Option<&str>,
        reviewed_at: DateTime<Utc>,
    ) -> AppResult<Option<Report>> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        row.status = status;
        row.admin_note = note.map(str::to_string);
        row.reviewed_at = Some(reviewed_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}
