//! Custom Axum extractors.

pub mod auth;
pub mod listing;

pub use auth::AuthUser;
pub use listing::ListQuery;
