//! In-memory stores.
//!
//! Rows live in insertion-ordered vectors behind a `tokio` RwLock. Used by
//! `database.backend = "memory"` and by the test suites, so their ordering
//! and matching rules mirror the SQL in [`crate::repositories`].

mod banner;
mod notification;
mod report;
mod user;

pub use banner::MemoryBannerStore;
pub use notification::MemoryNotificationStore;
pub use report::MemoryReportStore;
pub use user::MemoryUserStore;
