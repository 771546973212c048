//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Duration;

use lostprop_auth::{JwtDecoder, JwtEncoder, PasswordHasher, RbacEnforcer};
use lostprop_core::config::AppConfig;
use lostprop_core::error::AppError;
use lostprop_core::traits::ChangeNotifier;
use lostprop_database::Stores;
use lostprop_realtime::{SnapshotHub, SnapshotSources};
use lostprop_service::{
    AccountService, BannerService, ExportService, NotificationService, RegionClient,
    ReportService, ReviewService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Persistence backend (PostgreSQL or in-memory)
    pub stores: Stores,
    /// Per-topic change versions
    pub hub: Arc<SnapshotHub>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role-based access control enforcer
    pub rbac_enforcer: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    pub account_service: AccountService,
    pub user_service: UserService,
    pub report_service: ReportService,
    pub review_service: ReviewService,
    pub notification_service: NotificationService,
    pub banner_service: BannerService,
    pub export_service: ExportService,
    pub region_client: RegionClient,
    /// Live feeds for WebSocket sessions
    pub snapshots: SnapshotSources,
}

impl AppState {
    /// Wire every service on top of `stores`.
    pub fn build(config: AppConfig, stores: Stores) -> Result<Self, AppError> {
        let hub = Arc::new(SnapshotHub::new());
        let notifier: Arc<dyn ChangeNotifier> = hub.clone();

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        let account_service = AccountService::new(
            stores.users.clone(),
            password_hasher,
            jwt_encoder,
            &config.auth,
        );
        let user_service = UserService::new(stores.users.clone(), rbac_enforcer.clone());
        let report_service = ReportService::new(
            stores.reports.clone(),
            rbac_enforcer.clone(),
            notifier.clone(),
            config.reports.clone(),
        );
        let review_service = ReviewService::new(
            stores.reports.clone(),
            stores.notifications.clone(),
            rbac_enforcer.clone(),
            notifier.clone(),
        );
        let notification_service = NotificationService::new(
            stores.notifications.clone(),
            stores.users.clone(),
            rbac_enforcer.clone(),
            notifier.clone(),
        );
        let banner_service = BannerService::new(
            stores.banners.clone(),
            rbac_enforcer.clone(),
            notifier,
            &config.office,
        );
        let export_service = ExportService::new(
            stores.reports.clone(),
            rbac_enforcer.clone(),
            config.office.clone(),
        );
        let region_client = RegionClient::new(&config.geography)?;

        let snapshots = SnapshotSources::new(
            hub.clone(),
            report_service.clone(),
            notification_service.clone(),
            banner_service.clone(),
            Duration::from_secs(config.realtime.banner_poll_seconds.max(1)),
        );

        Ok(Self {
            config: Arc::new(config),
            stores,
            hub,
            jwt_decoder,
            rbac_enforcer,
            account_service,
            user_service,
            report_service,
            review_service,
            notification_service,
            banner_service,
            export_service,
            region_client,
            snapshots,
        })
    }
}
