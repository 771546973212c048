//! Dashboard counters over a set of reports.

use serde::Serialize;

use super::model::Report;
use super::status::ReportStatus;

/// Per-status counts and the most recent report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportSummary {
    pub pending: usize,
    pub being_processed: usize,
    pub completed: usize,
    pub rejected: usize,
    pub total: usize,
    /// Report with the latest report date, if any.
    pub latest: Option<Report>,
}

impl ReportSummary {
    /// Tally `reports`.
    pub fn from_reports(reports: &[Report]) -> Self {
        let mut summary = Self {
            total: reports.len(),
            ..Default::default()
        };
        for report in reports {
            match report.status {
                ReportStatus::Pending => summary.pending += 1,
                ReportStatus::BeingProcessed => summary.being_processed += 1,
                ReportStatus::Completed => summary.completed += 1,
                ReportStatus::Rejected => summary.rejected += 1,
            }
        }
        summary.latest = reports.iter().max_by_key(|r| r.report_date).cloned();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::NewReport;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[test]
    fn test_counts_and_latest() {
        let now = Utc::now();
        let mut reports: Vec<Report> = (0..4)
            .map(|i| {
                Report::from_submission(
                    NewReport {
                        name: format!("Pelapor {i}"),
                        ..Default::default()
                    },
                    Uuid::new_v4(),
                    now - Duration::days(i),
                )
            })
            .collect();
        reports[1].status = ReportStatus::BeingProcessed;
        reports[2].status = ReportStatus::Completed;
        reports[3].status = ReportStatus::Completed;

        let summary = ReportSummary::from_reports(&reports);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.being_processed, 1);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.latest.map(|r| r.name).as_deref(), Some("Pelapor 0"));
    }

    #[test]
    fn test_empty() {
        let summary = ReportSummary::from_reports(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.latest.is_none());
    }
}
