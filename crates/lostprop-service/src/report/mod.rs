//! Report submission, listing and review.

pub mod review;
pub mod service;

pub use review::{ReviewInput, ReviewOutcome, ReviewService};
pub use service::ReportService;
