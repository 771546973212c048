//! Banner creation and visibility.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use lostprop_auth::RbacEnforcer;
use lostprop_core::config::OfficeConfig;
use lostprop_core::error::AppError;
use lostprop_core::traits::ChangeNotifier;
use lostprop_core::types::Topic;
use lostprop_database::BannerStore;
use lostprop_entity::banner::{BannerState, ClockTime, HeaderBanner, NewBanner};

use crate::context::SessionContext;

/// Manages the header banner.
#[derive(Debug, Clone)]
pub struct BannerService {
    banners: Arc<dyn BannerStore>,
    rbac: Arc<RbacEnforcer>,
    notifier: Arc<dyn ChangeNotifier>,
    utc_offset_minutes: i32,
}

impl BannerService {
    /// Creates a new banner service evaluating windows in the office's zone.
    pub fn new(
        banners: Arc<dyn BannerStore>,
        rbac: Arc<RbacEnforcer>,
        notifier: Arc<dyn ChangeNotifier>,
        office: &OfficeConfig,
    ) -> Self {
        Self {
            banners,
            rbac,
            notifier,
            utc_offset_minutes: office.utc_offset_minutes,
        }
    }

    /// Publish a banner. It supersedes every older one.
    pub async fn create(
        &self,
        ctx: &SessionContext,
        input: NewBanner,
    ) -> Result<HeaderBanner, AppError> {
        self.rbac.require_admin(ctx.role)?;

        let message = input.message.trim();
        if message.is_empty() {
            return Err(AppError::validation("Pesan wajib diisi"));
        }
        let start: ClockTime = input.start_time.parse()?;
        let end: ClockTime = input.end_time.parse()?;
        if end < start {
            warn!(%start, %end, "Banner window crosses midnight and will never be shown");
        }

        let banner = NewBanner {
            message: message.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            active: input.active,
        }
        .into_banner(ctx.request_time);
        let banner = self.banners.insert(&banner).await?;

        self.notifier.notify(Topic::ActiveBanner);
        info!(banner_id = %banner.id, %start, %end, active = banner.active, "Banner published");
        Ok(banner)
    }

    /// Newest active banner, regardless of the time window.
    pub async fn current(&self) -> Result<Option<HeaderBanner>, AppError> {
        self.banners.latest_active().await
    }

    /// What the header shows at `now`.
    pub async fn state_at(&self, now: DateTime<Utc>) -> Result<BannerState, AppError> {
        let banner = self.current().await?;
        Ok(BannerState::evaluate(banner, now, self.utc_offset_minutes))
    }

    /// What the header shows right now.
    pub async fn state(&self) -> Result<BannerState, AppError> {
        self.state_at(Utc::now()).await
    }

    /// Recently created banners (staff only).
    pub async fn list_recent(
        &self,
        ctx: &SessionContext,
        limit: usize,
    ) -> Result<Vec<HeaderBanner>, AppError> {
        self.rbac.require_admin(ctx.role)?;
        self.banners.list_recent(limit).await
    }
}
