use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use lostprop_core::result::AppResult;
use lostprop_entity::notification::Notification;

use crate::store::NotificationStore;

/// In-memory notification store.
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    rows: RwLock<Vec<Notification>>,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn insert(&self, notification: &Notification) -> AppResult<Notification> {
        self.rows.write().await.push(notification.clone());
        Ok(notification.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        Ok(self.rows.read().await.iter().find(|n| n.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        let rows = self.rows.read().await;
        let mut out: Vec<Notification> = rows
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<u64> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|n| n.user_id == user_id && !n.read).count() as u64)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|n| n.id == id && n.user_id == user_id) {
            Some(row) => {
                row.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|n| !(n.id == id && n.user_id == user_id));
        Ok(rows.len() != before)
    }
}
