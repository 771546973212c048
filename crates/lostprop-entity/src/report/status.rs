//! Report status workflow.
//!
//! ```text
//! pending ──► diproses ──► selesai
//!    │            └──────► ditolak
//!    └──────────► selesai | ditolak
//! ```
//!
//! `selesai` and `ditolak` are terminal: the review control refuses to
//! move a report out of them. Storage writes whatever it is given.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use lostprop_core::AppError;

/// Processing state of a report.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "report_status")]
pub enum ReportStatus {
    /// Submitted, not yet looked at.
    #[default]
    #[sqlx(rename = "pending")]
    #[serde(rename = "pending", alias = "Pending")]
    Pending,
    /// Being processed by staff.
    #[sqlx(rename = "diproses")]
    #[serde(rename = "diproses", alias = "being_processed")]
    BeingProcessed,
    /// Completed; a certificate can be issued.
    #[sqlx(rename = "selesai")]
    #[serde(rename = "selesai", alias = "completed")]
    Completed,
    /// Rejected by staff.
    #[sqlx(rename = "ditolak")]
    #[serde(rename = "ditolak", alias = "rejected")]
    Rejected,
}

impl ReportStatus {
    /// All statuses in workflow order.
    pub const ALL: [ReportStatus; 4] = [
        Self::Pending,
        Self::BeingProcessed,
        Self::Completed,
        Self::Rejected,
    ];

    /// Whether no further review is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Whether a reviewer may move a report into this status.
    pub fn is_review_target(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Stored/wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::BeingProcessed => "diproses",
            Self::Completed => "selesai",
            Self::Rejected => "ditolak",
        }
    }

    /// Human-readable Indonesian label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::BeingProcessed => "Diproses",
            Self::Completed => "Selesai",
            Self::Rejected => "Ditolak",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "diproses" | "being_processed" | "being-processed" => Ok(Self::BeingProcessed),
            "selesai" | "completed" => Ok(Self::Completed),
            "ditolak" | "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::validation(format!(
                "Status laporan tidak dikenal: '{s}'"
            ))),
        }
    }
}
