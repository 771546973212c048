//! Time-windowed header banner.

pub mod service;

pub use service::BannerService;
