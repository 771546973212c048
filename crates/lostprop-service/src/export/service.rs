//! Report certificates and the staff register as downloadable PDFs.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use lostprop_auth::RbacEnforcer;
use lostprop_core::config::OfficeConfig;
use lostprop_core::error::AppError;
use lostprop_database::ReportStore;
use lostprop_entity::report::ReportFilter;

use super::pdf;
use super::template::{self, compact_date, office_zone};
use crate::context::SessionContext;

/// A rendered file ready to be sent as an attachment.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedDocument {
    pub filename: String,
    pub content_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Builds export documents from stored reports.
#[derive(Debug, Clone)]
pub struct ExportService {
    reports: Arc<dyn ReportStore>,
    rbac: Arc<RbacEnforcer>,
    office: OfficeConfig,
}

impl ExportService {
    pub fn new(reports: Arc<dyn ReportStore>, rbac: Arc<RbacEnforcer>, office: OfficeConfig) -> Self {
        Self {
            reports,
            rbac,
            office,
        }
    }

    /// Receipt certificate for one report (owner or staff).
    pub async fn report_pdf(
        &self,
        ctx: &SessionContext,
        id: Uuid,
    ) -> Result<ExportedDocument, AppError> {
        let report = self
            .reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Laporan tidak ditemukan"))?;
        self.rbac
            .require_owner_or_admin(ctx.role, ctx.user_id, report.user_id)?;

        let doc = template::certificate(&report, &self.office, ctx.request_time);
        let filename = format!("Laporan_{}_{}.pdf", report.id, self.stamp(ctx.request_time));
        Ok(self.finish(doc, filename))
    }

    /// Register of every report matching `filter` (staff only).
    pub async fn register_pdf(
        &self,
        ctx: &SessionContext,
        filter: &ReportFilter,
    ) -> Result<ExportedDocument, AppError> {
        self.rbac.require_admin(ctx.role)?;
        let reports = filter.apply(self.reports.list_all().await?);

        let doc = template::register(&reports, &self.office, ctx.request_time);
        let filename = format!(
            "Semua_Laporan_Kehilangan_{}.pdf",
            self.stamp(ctx.request_time)
        );
        info!(user_id = %ctx.user_id, reports = reports.len(), "Register exported");
        Ok(self.finish(doc, filename))
    }

    fn stamp(&self, now: DateTime<Utc>) -> String {
        compact_date(now.with_timezone(&office_zone(&self.office)).date_naive())
    }

    fn finish(&self, doc: super::Document, filename: String) -> ExportedDocument {
        let rendered = pdf::render(&doc);
        ExportedDocument {
            filename,
            content_type: "application/pdf",
            bytes: rendered.bytes,
            pages: rendered.pages,
        }
    }
}
