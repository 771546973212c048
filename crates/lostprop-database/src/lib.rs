//! # lostprop-database
//!
//! Persistence for the lost-property portal: the store traits the service
//! layer depends on, PostgreSQL repositories implementing them, and an
//! in-memory backend for development and tests.

pub mod backend;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use backend::Stores;
pub use connection::DatabasePool;
pub use store::{BannerStore, NotificationStore, ReportStore, UserStore};
