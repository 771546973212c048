//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;
use crate::report::{Report, ReportStatus};

/// A message addressed to one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    /// Recipient.
    pub user_id: Uuid,
    pub kind: NotificationKind,
    /// Related report, if any.
    pub report_id: Option<Uuid>,
    /// Reporter name on the related report.
    pub report_name: Option<String>,
    pub message: String,
    /// Report status at send time.
    pub status: Option<ReportStatus>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// The notification that accompanies a status change, addressed to the
    /// report owner. A blank note is replaced by a generated summary.
    pub fn status_update(
        report: &Report,
        status: ReportStatus,
        note: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let message = match note.map(str::trim) {
            Some(note) if !note.is_empty() => note.to_string(),
            _ => format!(
                "Status laporan Anda telah diperbarui menjadi {}",
                status.label()
            ),
        };
        Self {
            id: Uuid::new_v4(),
            user_id: report.user_id,
            kind: NotificationKind::StatusUpdate,
            report_id: Some(report.id),
            report_name: Some(report.name.clone()),
            message,
            status: Some(status),
            read: false,
            created_at: now,
        }
    }

    /// A direct message from staff.
    pub fn admin_message(user_id: Uuid, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind: NotificationKind::AdminMessage,
            report_id: None,
            report_name: None,
            message: message.into(),
            status: None,
            read: false,
            created_at: now,
        }
    }
}
