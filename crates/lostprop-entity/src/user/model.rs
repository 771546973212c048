//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered portal account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, stored lowercase.
    pub email: String,
    /// Full name given at registration.
    pub full_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Role decided at registration.
    pub role: UserRole,
    /// Optional display name from the profile page.
    pub display_name: Option<String>,
    /// Optional phone number.
    pub phone_number: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
    /// Optional national identity number (NIK).
    pub nik: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Name to show in greetings and notifications.
    pub fn preferred_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.full_name)
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Normalized email address.
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Role resolved from the email.
    pub role: UserRole,
}

impl NewUser {
    /// Materialize the account row.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: Uuid::new_v4(),
            email: self.email,
            full_name: self.full_name,
            password_hash: self.password_hash,
            role: self.role,
            display_name: None,
            phone_number: None,
            address: None,
            nik: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Profile fields a user may change about themselves.
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New NIK.
    pub nik: Option<String>,
}

impl UpdateProfile {
    /// Apply the changes to a user row.
    pub fn apply_to(&self, user: &mut User, now: DateTime<Utc>) {
        if let Some(v) = &self.display_name {
            user.display_name = Some(v.clone());
        }
        if let Some(v) = &self.phone_number {
            user.phone_number = Some(v.clone());
        }
        if let Some(v) = &self.address {
            user.address = Some(v.clone());
        }
        if let Some(v) = &self.nik {
            user.nik = Some(v.clone());
        }
        user.updated_at = now;
    }
}
