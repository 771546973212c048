//! Lost-property report entities.

pub mod attachment;
pub mod filter;
pub mod item;
pub mod model;
pub mod status;
pub mod summary;

pub use attachment::Attachment;
pub use filter::{ReportFilter, StatusFilter};
pub use item::{ItemCode, ItemUnit, LostItem};
pub use model::{NewReport, Report};
pub use status::ReportStatus;
pub use summary::ReportSummary;
