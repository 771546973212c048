//! Certificate and register export.
//!
//! `template` turns reports into a [`Document`], a flat list of layout
//! blocks; `pdf` lays those blocks out on A4 pages. Keeping the two apart
//! lets the wording be tested without parsing PDF output.

pub mod document;
pub mod pdf;
pub mod service;
pub mod template;

pub use document::{Align, Block, Document};
pub use service::{ExportService, ExportedDocument};
