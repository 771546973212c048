//! Inline file attachments.
//!
//! Attachments are stored inside the report row as base64 text, either raw
//! or as a `data:<mime>;base64,<payload>` URL. The decoded payload of each
//! file is capped by `reports.max_attachment_bytes`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use lostprop_core::{AppError, AppResult};

/// One file embedded in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original filename.
    pub name: String,
    /// Declared MIME type.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Base64 payload, optionally wrapped in a data URL.
    pub data: String,
}

impl Attachment {
    /// The base64 text with any data-URL prefix removed.
    pub fn payload(&self) -> &str {
        match self.data.split_once(";base64,") {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => &self.data,
        }
    }

    /// Decode the payload.
    pub fn decode(&self) -> AppResult<Vec<u8>> {
        STANDARD.decode(self.payload().trim()).map_err(|e| {
            AppError::with_source(
                lostprop_core::error::ErrorKind::Validation,
                format!("File {} tidak dapat dibaca", self.name),
                e,
            )
        })
    }

    /// Whether the declared type is an image or a PDF.
    pub fn has_allowed_type(&self) -> bool {
        let mime = self.content_type.trim().to_ascii_lowercase();
        mime.starts_with("image/") || mime == "application/pdf"
    }

    /// Validate size and type, returning the decoded size in bytes.
    ///
    /// Size is checked before type, so an oversized file of the wrong type
    /// reports the size problem.
    pub fn validate(&self, max_bytes: usize) -> AppResult<usize> {
        let size = self.decode()?.len();
        if size > max_bytes {
            return Err(AppError::payload_too_large(format!(
                "File {} terlalu besar. Maksimal ukuran file adalah {}",
                self.name,
                format_limit(max_bytes)
            )));
        }
        if !self.has_allowed_type() {
            return Err(AppError::validation(format!(
                "File {} harus berupa gambar atau PDF",
                self.name
            )));
        }
        Ok(size)
    }
}

/// Render a byte limit the way the upload form words it ("1MB").
fn format_limit(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    const KIB: usize = 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{bytes} byte")
    }
}
