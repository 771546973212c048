//! User domain entities.

pub mod model;
pub mod role;

pub use model::{NewUser, UpdateProfile, User};
pub use role::UserRole;
