//! Store backend selection.

use std::sync::Arc;

use tracing::info;

use lostprop_core::config::DatabaseConfig;
use lostprop_core::error::AppError;
use lostprop_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{
    MemoryBannerStore, MemoryNotificationStore, MemoryReportStore, MemoryUserStore,
};
use crate::migration::run_migrations;
use crate::repositories::{
    BannerRepository, NotificationRepository, ReportRepository, UserRepository,
};
use crate::store::{BannerStore, NotificationStore, ReportStore, UserStore};

/// The full set of stores, backed by one configured backend.
#[derive(Debug, Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub reports: Arc<dyn ReportStore>,
    pub notifications: Arc<dyn NotificationStore>,
    pub banners: Arc<dyn BannerStore>,
    /// Present for the PostgreSQL backend.
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Build the stores selected by `config.backend`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL stores");
                let db = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            "memory" => {
                info!("Initializing in-memory stores");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database backend: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// PostgreSQL repositories over an existing pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            reports: Arc::new(ReportRepository::new(pool.clone())),
            notifications: Arc::new(NotificationRepository::new(pool.clone())),
            banners: Arc::new(BannerRepository::new(pool)),
            pool: Some(db),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            reports: Arc::new(MemoryReportStore::new()),
            notifications: Arc::new(MemoryNotificationStore::new()),
            banners: Arc::new(MemoryBannerStore::new()),
            pool: None,
        }
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Whether the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(db) => db.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(db) = &self.pool {
            db.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend() {
        let config = DatabaseConfig {
            backend: "memory".into(),
            ..Default::default()
        };
        let stores = Stores::connect(&config).await.unwrap();
        assert_eq!(stores.backend_name(), "memory");
        assert!(stores.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_configuration_error() {
        let config = DatabaseConfig {
            backend: "sqlite".into(),
            ..Default::default()
        };
        let err = Stores::connect(&config).await.unwrap_err();
        assert_eq!(err.kind, lostprop_core::error::ErrorKind::Configuration);
    }
}
