//! # lostprop-service
//!
//! Business logic for the lost-property portal. Each service orchestrates
//! the stores, the auth primitives and the change notifier to implement
//! one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. Every successful write
//! signals the affected real-time topics through [`ChangeNotifier`].
//!
//! [`ChangeNotifier`]: lostprop_core::traits::ChangeNotifier

pub mod banner;
pub mod context;
pub mod export;
pub mod geography;
pub mod notification;
pub mod report;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use banner::BannerService;
pub use context::SessionContext;
pub use export::ExportService;
pub use geography::RegionClient;
pub use notification::NotificationService;
pub use report::{ReportService, ReviewService};
pub use user::{AccountService, UserService};
