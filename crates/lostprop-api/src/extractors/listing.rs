//! Query parameters shared by report listings and exports.

use serde::{Deserialize, Serialize};

use lostprop_core::error::AppError;
use lostprop_core::types::PageRequest;
use lostprop_entity::report::{ReportFilter, StatusFilter};

/// `?status=diproses&search=budi&page=2&page_size=10`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// `all` or one status value.
    #[serde(default)]
    pub status: Option<String>,
    /// Free-text search term.
    #[serde(default, alias = "q")]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
}

impl ListQuery {
    pub fn filter(&self) -> Result<ReportFilter, AppError> {
        let status: StatusFilter = self.status.as_deref().unwrap_or("").parse()?;
        Ok(ReportFilter::new(status, self.search.clone().unwrap_or_default()))
    }

    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }
}
