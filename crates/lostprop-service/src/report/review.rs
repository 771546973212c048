//! Staff review of reports.
//!
//! A review is two separate writes: the status change on the report, then
//! one notification to the owner. They are not atomic. When the second
//! write fails the status change stands, the failure is logged, and the
//! outcome carries no notification.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use lostprop_auth::RbacEnforcer;
use lostprop_core::error::AppError;
use lostprop_core::traits::ChangeNotifier;
use lostprop_core::types::Topic;
use lostprop_database::{NotificationStore, ReportStore};
use lostprop_entity::notification::Notification;
use lostprop_entity::report::{Report, ReportStatus};

use crate::context::SessionContext;

/// A reviewer's decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInput {
    pub status: ReportStatus,
    #[serde(default)]
    pub note: Option<String>,
}

/// Result of a review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewOutcome {
    pub report: Report,
    /// The owner's notification, absent if writing it failed.
    pub notification: Option<Notification>,
}

/// Applies status changes to reports.
#[derive(Debug, Clone)]
pub struct ReviewService {
    reports: Arc<dyn ReportStore>,
    notifications: Arc<dyn NotificationStore>,
    rbac: Arc<RbacEnforcer>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        reports: Arc<dyn ReportStore>,
        notifications: Arc<dyn NotificationStore>,
        rbac: Arc<RbacEnforcer>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        Self {
            reports,
            notifications,
            rbac,
            notifier,
        }
    }

    /// Move a report to `input.status` and notify its owner.
    ///
    /// Refused for reports already completed or rejected, and for a target
    /// of pending.
    pub async fn review(
        &self,
        ctx: &SessionContext,
        report_id: Uuid,
        input: ReviewInput,
    ) -> Result<ReviewOutcome, AppError> {
        self.rbac.require_admin(ctx.role)?;

        if !input.status.is_review_target() {
            return Err(AppError::validation(format!(
                "Status {} tidak dapat dipilih saat meninjau laporan",
                input.status.label()
            )));
        }

        let current = self
            .reports
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| AppError::not_found("Laporan tidak ditemukan"))?;
        if !current.review_enabled() {
            return Err(AppError::conflict(format!(
                "Laporan dengan status {} tidak dapat diubah lagi",
                current.status.label()
            )));
        }

        let note = input
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());

        let report = self
            .reports
            .update_review(report_id, input.status, note, ctx.request_time)
            .await?
            .ok_or_else(|| AppError::not_found("Laporan tidak ditemukan"))?;
        self.notifier
            .notify_all(&[Topic::UserReports(report.user_id), Topic::AllReports]);

        info!(
            report_id = %report.id,
            reviewer = %ctx.user_id,
            from = %current.status,
            to = %report.status,
            "Report reviewed"
        );

        let pending =
            Notification::status_update(&report, input.status, note, ctx.request_time);
        let notification = match self.notifications.insert(&pending).await {
            Ok(n) => {
                self.notifier.notify(Topic::UserNotifications(n.user_id));
                Some(n)
            }
            Err(e) => {
                warn!(
                    report_id = %report.id,
                    user_id = %report.user_id,
                    error = %e,
                    "Status changed but owner notification was not written"
                );
                None
            }
        };

        Ok(ReviewOutcome {
            report,
            notification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ctx, notifier, seed_report, seed_user};
    use async_trait::async_trait;
    use lostprop_core::error::ErrorKind;
    use lostprop_core::result::AppResult;
    use lostprop_database::Stores;
    use lostprop_entity::notification::NotificationKind;
    use lostprop_entity::user::UserRole;

    fn service(stores: &Stores) -> ReviewService {
        ReviewService::new(
            stores.reports.clone(),
            stores.notifications.clone(),
            Arc::new(RbacEnforcer::new()),
            notifier(),
        )
    }

    fn decide(status: ReportStatus, note: Option<&str>) -> ReviewInput {
        ReviewInput {
            status,
            note: note.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_terminal_review_disables_control_and_notifies_owner_once() {
        let stores = Stores::memory();
        let svc = service(&stores);
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let owner = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let report = seed_report(&stores, owner.id, "Rina Wati").await;

        let outcome = svc
            .review(
                &ctx(&admin),
                report.id,
                decide(ReportStatus::Completed, Some("Surat dapat diambil")),
            )
            .await
            .unwrap();
        assert_eq!(outcome.report.status, ReportStatus::Completed);
        assert!(!outcome.report.review_enabled());
        assert_eq!(outcome.report.admin_note.as_deref(), Some("Surat dapat diambil"));
        assert!(outcome.report.reviewed_at.is_some());

        let inbox = stores.notifications.list_for_user(owner.id).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, NotificationKind::StatusUpdate);
        assert_eq!(inbox[0].status, Some(ReportStatus::Completed));
        assert_eq!(inbox[0].message, "Surat dapat diambil");
        assert!(stores.notifications.list_for_user(admin.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_processing_can_be_skipped_or_taken() {
        let stores = Stores::memory();
        let svc = service(&stores);
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let owner = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let report = seed_report(&stores, owner.id, "Rina").await;

        let outcome = svc
            .review(&ctx(&admin), report.id, decide(ReportStatus::BeingProcessed, None))
            .await
            .unwrap();
        assert!(outcome.report.review_enabled());
        assert_eq!(
            outcome.notification.unwrap().message,
            "Status laporan Anda telah diperbarui menjadi Diproses"
        );

        let outcome = svc
            .review(&ctx(&admin), report.id, decide(ReportStatus::Rejected, Some("Data tidak lengkap")))
            .await
            .unwrap();
        assert_eq!(outcome.report.status, ReportStatus::Rejected);
        assert_eq!(stores.notifications.list_for_user(owner.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_terminal_reports_cannot_be_reviewed_again() {
        let stores = Stores::memory();
        let svc = service(&stores);
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let owner = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let report = seed_report(&stores, owner.id, "Rina").await;

        svc.review(&ctx(&admin), report.id, decide(ReportStatus::Rejected, None))
            .await
            .unwrap();
        let err = svc
            .review(&ctx(&admin), report.id, decide(ReportStatus::Completed, None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        let stored = stores.reports.find_by_id(report.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ReportStatus::Rejected);
        assert_eq!(stores.notifications.list_for_user(owner.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_pending_target_and_non_staff() {
        let stores = Stores::memory();
        let svc = service(&stores);
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let owner = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let report = seed_report(&stores, owner.id, "Rina").await;

        let err = svc
            .review(&ctx(&admin), report.id, decide(ReportStatus::Pending, None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = svc
            .review(&ctx(&owner), report.id, decide(ReportStatus::Completed, None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let err = svc
            .review(&ctx(&admin), Uuid::new_v4(), decide(ReportStatus::Completed, None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[derive(Debug)]
    struct BrokenInbox;

    #[async_trait]
    impl NotificationStore for BrokenInbox {
        async fn insert(&self, _: &Notification) -> AppResult<Notification> {
            Err(AppError::database("inbox offline"))
        }
        async fn find_by_id(&self, _: Uuid) -> AppResult<Option<Notification>> {
            Ok(None)
        }
        async fn list_for_user(&self, _: Uuid) -> AppResult<Vec<Notification>> {
            Ok(Vec::new())
        }
        async fn count_unread(&self, _: Uuid) -> AppResult<u64> {
            Ok(0)
        }
        async fn mark_read(&self, _: Uuid, _: Uuid) -> AppResult<bool> {
            Ok(false)
        }
        async fn delete(&self, _: Uuid, _: Uuid) -> AppResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_notification_failure_keeps_status_change() {
        let stores = Stores::memory();
        let svc = ReviewService::new(
            stores.reports.clone(),
            Arc::new(BrokenInbox),
            Arc::new(RbacEnforcer::new()),
            notifier(),
        );
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let owner = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let report = seed_report(&stores, owner.id, "Rina").await;

        let outcome = svc
            .review(&ctx(&admin), report.id, decide(ReportStatus::Completed, None))
            .await
            .unwrap();
        assert!(outcome.notification.is_none());
        let stored = stores.reports.find_by_id(report.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ReportStatus::Completed);
    }
}
