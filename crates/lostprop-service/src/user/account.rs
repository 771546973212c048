//! Registration and login.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use lostprop_auth::failure::{AuthFailure, AuthFlow};
use lostprop_auth::jwt::{IssuedToken, JwtEncoder};
use lostprop_auth::password::{PasswordHasher, PasswordValidator};
use lostprop_auth::{is_valid_email, normalize_email, resolve_role};
use lostprop_core::config::AuthConfig;
use lostprop_core::error::{AppError, ErrorKind};
use lostprop_database::UserStore;
use lostprop_entity::user::{NewUser, User};

/// Registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// A signed-in account and its session token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: User,
    #[serde(flatten)]
    pub token: IssuedToken,
}

/// Creates accounts and signs users in.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
    admin_email: String,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            validator: Arc::new(PasswordValidator::new(config)),
            encoder,
            admin_email: config.admin_email.clone(),
        }
    }

    /// Create an account and sign it in.
    ///
    /// The role is decided here, once, from the email address.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AppError> {
        let flow = AuthFlow::Register;
        let full_name = input.full_name.trim();
        if full_name.is_empty() {
            return Err(AppError::validation("Nama lengkap wajib diisi"));
        }
        if !is_valid_email(&input.email) {
            return Err(AuthFailure::InvalidEmail.into_error(flow));
        }
        self.validator
            .validate(&input.password)
            .map_err(|f| f.into_error(flow))?;

        let email = normalize_email(&input.email);
        let existing = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| internal_failure(flow, e))?;
        if existing.is_some() {
            return Err(AuthFailure::EmailAlreadyInUse.into_error(flow));
        }

        let role = resolve_role(&email, &self.admin_email);
        let password_hash = self
            .hasher
            .hash_password(&input.password)
            .map_err(|e| internal_failure(flow, e))?;

        let user = NewUser {
            email,
            full_name: full_name.to_string(),
            password_hash,
            role,
        }
        .into_user(Utc::now());

        let user = self.users.create(&user).await.map_err(|e| {
            if e.kind == ErrorKind::Conflict {
                AuthFailure::EmailAlreadyInUse.into_error(flow)
            } else {
                internal_failure(flow, e)
            }
        })?;

        let token = self.encoder.issue(&user)?;
        info!(user_id = %user.id, role = %user.role, "Account registered");
        Ok(AuthSession { user, token })
    }

    /// Verify credentials and issue a session token.
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AppError> {
        let flow = AuthFlow::Login;
        if !is_valid_email(&input.email) {
            return Err(AuthFailure::InvalidEmail.into_error(flow));
        }

        let email = normalize_email(&input.email);
        let Some(user) = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| internal_failure(flow, e))?
        else {
            warn!(email = %email, "Login for unknown account");
            return Err(AuthFailure::InvalidCredential.into_error(flow));
        };

        let valid = self
            .hasher
            .verify_password(&input.password, &user.password_hash)
            .map_err(|e| internal_failure(flow, e))?;
        if !valid {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(AuthFailure::InvalidCredential.into_error(flow));
        }

        let token = self.encoder.issue(&user)?;
        info!(user_id = %user.id, "User logged in");
        Ok(AuthSession { user, token })
    }
}

/// Log the real cause and surface the flow's generic message.
fn internal_failure(flow: AuthFlow, err: AppError) -> AppError {
    error!(error = %err, ?flow, "Authentication backend failure");
    AuthFailure::Unknown("auth/internal-error".to_string()).into_error(flow)
}
