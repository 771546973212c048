//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use lostprop_core::error::{AppError, ErrorKind};
use lostprop_core::result::AppResult;
use lostprop_entity::user::{User, UserRole};

use crate::store::UserStore;

/// Repository for account rows.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, full_name, password_hash, role, display_name, \
             phone_number, address, nik, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(&user.display_name)
        .bind(&user.phone_number)
        .bind(&user.address)
        .bind(&user.nik)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let unique = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if unique {
                AppError::with_source(ErrorKind::Conflict, "Email already registered", e)
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            }
        })
    }

    async fn update_profile(&self, user: &User) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET display_name = $2, phone_number = $3, address = $4, nik = $5, \
             updated_at = $6 WHERE id = $1 RETURNING *",
        )
        .bind(user.id)
        .bind(&user.display_name)
        .bind(&user.phone_number)
        .bind(&user.address)
        .bind(&user.nik)
        .bind(user.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))
    }

    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = $1 ORDER BY created_at")
            .bind(role)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list users by role", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}
