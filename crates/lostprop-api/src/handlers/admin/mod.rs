//! Admin-only handlers. Mounted behind the admin guard.

pub mod banners;
pub mod notifications;
pub mod reports;
pub mod users;
