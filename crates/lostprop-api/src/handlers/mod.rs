//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod banner;
pub mod health;
pub mod notification;
pub mod profile;
pub mod region;
pub mod report;
pub mod ws;

use axum::http::header;
use axum::response::{IntoResponse, Response};

use lostprop_service::export::ExportedDocument;

/// Serve an exported file as a download.
pub(crate) fn attachment(doc: ExportedDocument) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", doc.filename);
    (
        [
            (header::CONTENT_TYPE, doc.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        doc.bytes,
    )
        .into_response()
}
