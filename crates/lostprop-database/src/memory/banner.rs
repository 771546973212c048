use async_trait::async_trait;
use tokio::sync::RwLock;

use lostprop_core::result::AppResult;
use lostprop_entity::banner::HeaderBanner;

use crate::store::BannerStore;

/// In-memory banner store.
#[derive(Debug, Default)]
pub struct MemoryBannerStore {
    rows: RwLock<Vec<HeaderBanner>>,
}

impl MemoryBannerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BannerStore for MemoryBannerStore {
    async fn insert(&self, banner: &HeaderBanner) -> AppResult<HeaderBanner> {
        self.rows.write().await.push(banner.clone());
        Ok(banner.clone())
    }

    async fn latest_active(&self) -> AppResult<Option<HeaderBanner>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .enumerate()
            .filter(|(_, b)| b.active)
            .max_by_key(|(seq, b)| (b.created_at, *seq))
            .map(|(_, b)| b.clone()))
    }

    async fn list_recent(&self, limit: usize) -> AppResult<Vec<HeaderBanner>> {
        let rows = self.rows.read().await;
        let mut out: Vec<HeaderBanner> = rows.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out.truncate(limit);
        Ok(out)
    }
}
