//! Profile self-service and the staff account list.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use lostprop_auth::RbacEnforcer;
use lostprop_core::error::AppError;
use lostprop_database::UserStore;
use lostprop_entity::user::{UpdateProfile, User, UserRole};

use crate::context::SessionContext;

/// Handles profile reads and updates.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    rbac: Arc<RbacEnforcer>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { users, rbac }
    }

    /// The caller's own account.
    pub async fn get_profile(&self, ctx: &SessionContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Pengguna tidak ditemukan"))
    }

    /// Update the caller's optional profile fields.
    pub async fn update_profile(
        &self,
        ctx: &SessionContext,
        changes: UpdateProfile,
    ) -> Result<User, AppError> {
        if let Some(nik) = changes.nik.as_deref().map(str::trim) {
            if !nik.is_empty() && !nik.chars().all(|c| c.is_ascii_digit()) {
                return Err(AppError::validation("NIK hanya boleh berisi angka"));
            }
        }

        let mut user = self.get_profile(ctx).await?;
        changes.apply_to(&mut user, Utc::now());

        let user = self
            .users
            .update_profile(&user)
            .await?
            .ok_or_else(|| AppError::not_found("Pengguna tidak ditemukan"))?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Every account (staff only).
    pub async fn list_users(&self, ctx: &SessionContext) -> Result<Vec<User>, AppError> {
        self.rbac.require_admin(ctx.role)?;
        self.users.list_all().await
    }

    /// Citizen accounts, the possible recipients of a direct message.
    pub async fn list_recipients(&self, ctx: &SessionContext) -> Result<Vec<User>, AppError> {
        self.rbac.require_admin(ctx.role)?;
        self.users.list_by_role(UserRole::User).await
    }
}
