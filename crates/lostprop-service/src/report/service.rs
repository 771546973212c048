//! Report submission and listing.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use lostprop_auth::RbacEnforcer;
use lostprop_core::config::ReportsConfig;
use lostprop_core::error::AppError;
use lostprop_core::traits::ChangeNotifier;
use lostprop_core::types::{PageRequest, PageResponse, Topic};
use lostprop_database::ReportStore;
use lostprop_entity::report::{NewReport, Report, ReportFilter, ReportSummary};

use crate::context::SessionContext;

/// Handles the citizen side of reports and the staff listing.
#[derive(Debug, Clone)]
pub struct ReportService {
    reports: Arc<dyn ReportStore>,
    rbac: Arc<RbacEnforcer>,
    notifier: Arc<dyn ChangeNotifier>,
    limits: ReportsConfig,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        reports: Arc<dyn ReportStore>,
        rbac: Arc<RbacEnforcer>,
        notifier: Arc<dyn ChangeNotifier>,
        limits: ReportsConfig,
    ) -> Self {
        Self {
            reports,
            rbac,
            notifier,
            limits,
        }
    }

    /// Submit a new report owned by the caller. It always starts as pending.
    ///
    /// Every attachment is checked before anything is written; one bad
    /// file rejects the whole submission.
    pub async fn create(
        &self,
        ctx: &SessionContext,
        submission: NewReport,
    ) -> Result<Report, AppError> {
        if submission.name.trim().is_empty() {
            return Err(AppError::validation("Nama pelapor wajib diisi"));
        }
        if submission.national_id.trim().is_empty() {
            return Err(AppError::validation("NIK wajib diisi"));
        }
        if submission.items.len() > self.limits.max_items {
            return Err(AppError::validation(format!(
                "Maksimal {} barang per laporan",
                self.limits.max_items
            )));
        }
        if submission.attachments.len() > self.limits.max_attachments {
            return Err(AppError::validation(format!(
                "Maksimal {} file lampiran per laporan",
                self.limits.max_attachments
            )));
        }

        let mut attachment_bytes = 0usize;
        for attachment in &submission.attachments {
            attachment_bytes += attachment.validate(self.limits.max_attachment_bytes)?;
        }

        let report = Report::from_submission(submission, ctx.user_id, ctx.request_time);
        let report = self.reports.insert(&report).await?;

        self.notifier
            .notify_all(&[Topic::UserReports(report.user_id), Topic::AllReports]);
        info!(
            report_id = %report.id,
            user_id = %ctx.user_id,
            items = report.items().len(),
            attachments = report.attachments().len(),
            attachment_bytes,
            "Report submitted"
        );
        Ok(report)
    }

    /// The caller's own reports, newest first, narrowed by `filter`.
    pub async fn list_mine(
        &self,
        ctx: &SessionContext,
        filter: &ReportFilter,
    ) -> Result<Vec<Report>, AppError> {
        let reports = self.reports.list_by_owner(ctx.user_id).await?;
        Ok(filter.apply(reports))
    }

    /// Every report, newest first, narrowed by `filter` and paged (staff only).
    pub async fn list_all(
        &self,
        ctx: &SessionContext,
        filter: &ReportFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<Report>, AppError> {
        self.rbac.require_admin(ctx.role)?;
        let reports = self.reports.list_all().await?;
        Ok(PageResponse::from_vec(filter.apply(reports), page))
    }

    /// Unfiltered list the caller follows live: everything for staff,
    /// their own reports otherwise.
    pub async fn snapshot(&self, ctx: &SessionContext) -> Result<Vec<Report>, AppError> {
        if ctx.is_admin() {
            self.reports.list_all().await
        } else {
            self.reports.list_by_owner(ctx.user_id).await
        }
    }

    /// Topic whose changes affect [`snapshot`](Self::snapshot) for `ctx`.
    pub fn snapshot_topic(ctx: &SessionContext) -> Topic {
        if ctx.is_admin() {
            Topic::AllReports
        } else {
            Topic::UserReports(ctx.user_id)
        }
    }

    /// One report, visible to its owner and to staff.
    pub async fn get(&self, ctx: &SessionContext, id: Uuid) -> Result<Report, AppError> {
        let report = self
            .reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Laporan tidak ditemukan"))?;
        self.rbac
            .require_owner_or_admin(ctx.role, ctx.user_id, report.user_id)?;
        Ok(report)
    }

    /// Delete a report. Owners may delete their own; staff may delete any.
    pub async fn delete(&self, ctx: &SessionContext, id: Uuid) -> Result<(), AppError> {
        let report = self.get(ctx, id).await?;
        if !self.reports.delete(report.id).await? {
            return Err(AppError::not_found("Laporan tidak ditemukan"));
        }
        self.notifier
            .notify_all(&[Topic::UserReports(report.user_id), Topic::AllReports]);
        info!(report_id = %id, user_id = %ctx.user_id, "Report deleted");
        Ok(())
    }

    /// Dashboard counters over the caller's reports.
    pub async fn summary_mine(&self, ctx: &SessionContext) -> Result<ReportSummary, AppError> {
        let reports = self.reports.list_by_owner(ctx.user_id).await?;
        Ok(ReportSummary::from_reports(&reports))
    }

    /// Dashboard counters over every report (staff only).
    pub async fn summary_all(&self, ctx: &SessionContext) -> Result<ReportSummary, AppError> {
        self.rbac.require_admin(ctx.role)?;
        let reports = self.reports.list_all().await?;
        Ok(ReportSummary::from_reports(&reports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingNotifier, ctx, notifier, seed_report, seed_user, submission};
    use lostprop_core::error::ErrorKind;
    use lostprop_database::Stores;
    use lostprop_entity::report::{Attachment, ReportStatus, StatusFilter};
    use lostprop_entity::user::UserRole;

    fn service(stores: &Stores, notifier: Arc<RecordingNotifier>) -> ReportService {
        ReportService::new(
            stores.reports.clone(),
            Arc::new(RbacEnforcer::new()),
            notifier,
            ReportsConfig::default(),
        )
    }

    /// Decodes to 1,048,577 bytes, one past the default limit.
    fn oversized(name: &str) -> Attachment {
        Attachment {
            name: name.into(),
            content_type: "image/jpeg".into(),
            data: format!("data:image/jpeg;base64,{}AAA=", "AAAA".repeat(349_525)),
        }
    }

    #[tokio::test]
    async fn test_create_is_pending_and_signals_topics() {
        let stores = Stores::memory();
        let rec = notifier();
        let svc = service(&stores, rec.clone());
        let user = seed_user(&stores, "rina@example.com", UserRole::User).await;

        let report = svc
            .create(&ctx(&user), submission("Rina Wati", "1376020202910002"))
            .await
            .unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.user_id, user.id);
        assert_eq!(
            rec.topics(),
            vec![Topic::UserReports(user.id), Topic::AllReports]
        );
    }

    #[tokio::test]
    async fn test_create_requires_name_and_nik() {
        let stores = Stores::memory();
        let svc = service(&stores, notifier());
        let user = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let err = svc
            .create(&ctx(&user), submission("  ", "1376"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = svc
            .create(&ctx(&user), submission("Rina", ""))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_oversized_attachment_rejects_whole_report() {
        let stores = Stores::memory();
        let rec = notifier();
        let svc = service(&stores, rec.clone());
        let user = seed_user(&stores, "rina@example.com", UserRole::User).await;

        let mut new = submission("Rina", "1376");
        new.attachments = vec![oversized("ktp.jpg")];
        let err = svc.create(&ctx(&user), new).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::PayloadTooLarge);
        assert_eq!(
            err.message,
            "File ktp.jpg terlalu besar. Maksimal ukuran file adalah 1MB"
        );
        assert!(stores.reports.list_all().await.unwrap().is_empty());
        assert!(rec.topics().is_empty());
    }

    #[tokio::test]
    async fn test_listing_scopes() {
        let stores = Stores::memory();
        let svc = service(&stores, notifier());
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let rina = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let andi = seed_user(&stores, "andi@example.com", UserRole::User).await;
        seed_report(&stores, rina.id, "Rina Wati").await;
        seed_report(&stores, andi.id, "Andi Saputra").await;

        let mine = svc
            .list_mine(&ctx(&rina), &ReportFilter::default())
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);

        let filter = ReportFilter::new(StatusFilter::All, "andi");
        let page = svc
            .list_all(&ctx(&admin), &filter, &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].name, "Andi Saputra");

        let err = svc
            .list_all(&ctx(&rina), &filter, &PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn test_get_and_delete_respect_ownership() {
        let stores = Stores::memory();
        let svc = service(&stores, notifier());
        let rina = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let andi = seed_user(&stores, "andi@example.com", UserRole::User).await;
        let report = seed_report(&stores, rina.id, "Rina Wati").await;

        assert_eq!(
            svc.get(&ctx(&andi), report.id).await.unwrap_err().kind,
            ErrorKind::Authorization
        );
        assert_eq!(
            svc.delete(&ctx(&andi), report.id).await.unwrap_err().kind,
            ErrorKind::Authorization
        );
        svc.delete(&ctx(&rina), report.id).await.unwrap();
        assert_eq!(
            svc.get(&ctx(&rina), report.id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_summary() {
        let stores = Stores::memory();
        let svc = service(&stores, notifier());
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let rina = seed_user(&stores, "rina@example.com", UserRole::User).await;
        seed_report(&stores, rina.id, "Rina 1").await;
        let second = seed_report(&stores, rina.id, "Rina 2").await;
        stores
            .reports
            .update_review(second.id, ReportStatus::Completed, None, chrono::Utc::now())
            .await
            .unwrap();

        let summary = svc.summary_mine(&ctx(&rina)).await.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(svc.summary_all(&ctx(&admin)).await.unwrap().total, 2);
    }

    #[tokio::test]
    async fn test_snapshot_scope_follows_role() {
        let stores = Stores::memory();
        let svc = service(&stores, notifier());
        let admin = seed_user(&stores, "admin@polres.com", UserRole::Admin).await;
        let rina = seed_user(&stores, "rina@example.com", UserRole::User).await;
        let andi = seed_user(&stores, "andi@example.com", UserRole::User).await;
        seed_report(&stores, rina.id, "Rina Wati").await;
        seed_report(&stores, andi.id, "Andi").await;

        assert_eq!(svc.snapshot(&ctx(&rina)).await.unwrap().len(), 1);
        assert_eq!(svc.snapshot(&ctx(&admin)).await.unwrap().len(), 2);
        assert_eq!(ReportService::snapshot_topic(&ctx(&admin)), Topic::AllReports);
        assert_eq!(
            ReportService::snapshot_topic(&ctx(&rina)),
            Topic::UserReports(rina.id)
        );
    }
}
