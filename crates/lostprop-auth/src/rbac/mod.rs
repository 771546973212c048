//! Role resolution and access checks.

pub mod enforcer;
pub mod role;

pub use enforcer::RbacEnforcer;
pub use role::resolve_role;
