//! Per-request session context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lostprop_entity::user::UserRole;

/// Who is acting, built from a verified session token.
///
/// Passed explicitly into every service method that depends on the
/// caller's identity or role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// Account email from the token.
    pub email: String,
    /// Role carried by the token.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl SessionContext {
    /// Creates a new session context stamped with the current time.
    pub fn new(user_id: Uuid, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is staff.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
