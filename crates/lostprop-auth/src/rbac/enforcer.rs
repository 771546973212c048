//! Admin and owner checks.

use uuid::Uuid;

use lostprop_core::error::AppError;
use lostprop_entity::user::UserRole;

/// Enforces the two-role access model.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    pub fn new() -> Self {
        Self
    }

    /// Only staff may pass.
    pub fn require_admin(&self, role: UserRole) -> Result<(), AppError> {
        if role.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(
                "Anda tidak memiliki akses ke halaman ini",
            ))
        }
    }

    /// Staff, or the user who owns the resource.
    pub fn require_owner_or_admin(
        &self,
        role: UserRole,
        actor: Uuid,
        owner: Uuid,
    ) -> Result<(), AppError> {
        if role.is_admin() || actor == owner {
            Ok(())
        } else {
            Err(AppError::authorization(
                "Anda tidak memiliki akses ke laporan ini",
            ))
        }
    }
}
