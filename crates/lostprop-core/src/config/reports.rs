//! Report submission limits.

use serde::{Deserialize, Serialize};

/// Limits applied when a report is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Maximum decoded size of a single attachment in bytes.
    #[serde(default = "default_max_attachment")]
    pub max_attachment_bytes: usize,
    /// Maximum number of attachments on one report.
    #[serde(default = "default_max_attachments")]
    pub max_attachments: usize,
    /// Maximum number of lost items on one report.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            max_attachment_bytes: default_max_attachment(),
            max_attachments: default_max_attachments(),
            max_items: default_max_items(),
        }
    }
}

fn default_max_attachment() -> usize {
    1024 * 1024
}

fn default_max_attachments() -> usize {
    5
}

fn default_max_items() -> usize {
    50
}
