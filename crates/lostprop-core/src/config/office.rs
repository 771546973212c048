//! Police office identity.
//!
//! The office's UTC offset drives every wall-clock decision (banner
//! windows, dates printed on exported certificates).

use serde::{Deserialize, Serialize};

/// Office identity and locale configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeConfig {
    /// Offset of the office's local time from UTC, in minutes (WIB = +420).
    #[serde(default = "default_offset")]
    pub utc_offset_minutes: i32,
    /// City printed in the signature block of exported documents.
    #[serde(default = "default_city")]
    pub city: String,
    /// Letterhead lines printed at the top of every exported document.
    #[serde(default = "default_letterhead")]
    pub letterhead: Vec<String>,
    /// Title of the single-report certificate.
    #[serde(default = "default_certificate_title")]
    pub certificate_title: String,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_offset(),
            city: default_city(),
            letterhead: default_letterhead(),
            certificate_title: default_certificate_title(),
        }
    }
}

fn default_offset() -> i32 {
    7 * 60
}

fn default_city() -> String {
    "Payakumbuh".to_string()
}

fn default_letterhead() -> Vec<String> {
    vec![
        "KEPOLISIAN NEGARA REPUBLIK INDONESIA".to_string(),
        "DAERAH SUMATERA BARAT".to_string(),
        "RESOR PAYAKUMBUH".to_string(),
    ]
}

fn default_certificate_title() -> String {
    "SURAT TANDA PENERIMAAN LAPORAN KEHILANGAN".to_string()
}
