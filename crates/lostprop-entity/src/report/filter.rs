//! Report search and status narrowing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use lostprop_core::AppError;

use super::model::Report;
use super::status::ReportStatus;

/// Status part of a filter: everything, or one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status narrowing.
    #[default]
    All,
    /// Only reports in this status.
    Only(ReportStatus),
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Only(status) => status.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e: AppError| serde::de::Error::custom(e.message))
    }
}

/// The (status, search term) pair applied to a report list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Status narrowing.
    #[serde(default)]
    pub status: StatusFilter,
    /// Search term; empty matches everything.
    #[serde(default)]
    pub search: String,
}

impl ReportFilter {
    /// Create a filter.
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Whether `report` passes this filter.
    ///
    /// The term matches the reporter name case-insensitively, and the
    /// report id or national ID number as a case-sensitive substring.
    pub fn matches(&self, report: &Report) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => report.status == status,
        };
        if !status_ok {
            return false;
        }

        let term = self.search.as_str();
        if term.is_empty() {
            return true;
        }

        report.name.to_lowercase().contains(&term.to_lowercase())
            || report.id.to_string().contains(term)
            || report.national_id.contains(term)
    }

    /// Keep the reports that pass, preserving order.
    pub fn apply(&self, reports: Vec<Report>) -> Vec<Report> {
        reports.into_iter().filter(|r| self.matches(r)).collect()
    }
}
