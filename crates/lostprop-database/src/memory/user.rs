use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use lostprop_core::AppError;
use lostprop_core::result::AppResult;
use lostprop_entity::user::{User, UserRole};

use crate::store::UserStore;

/// In-memory account store.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    rows: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(AppError::conflict("Email already registered"));
        }
        rows.push(user.clone());
        Ok(user.clone())
    }

    async fn update_profile(&self, user: &User) -> AppResult<Option<User>> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|u| u.id == user.id) else {
            return Ok(None);
        };
        row.display_name = user.display_name.clone();
        row.phone_number = user.phone_number.clone();
        row.address = user.address.clone();
        row.nik = user.nik.clone();
        row.updated_at = user.updated_at;
        Ok(Some(row.clone()))
    }

    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.read().await.clone())
    }
}
