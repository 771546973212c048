//! # lostprop-core
//!
//! Core crate for the lost-property report portal. Contains configuration
//! schemas, the unified error system, pagination types, real-time change
//! topics, and the traits other crates implement.
//!
//! This crate has **no** internal dependencies on other portal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
