//! Per-session combination of every feed.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use tracing::warn;

use lostprop_core::error::AppError;
use lostprop_core::types::Topic;
use lostprop_service::{BannerService, NotificationService, ReportService, SessionContext};

use crate::banner::banner_feed;
use crate::feed::SnapshotFeed;
use crate::hub::SnapshotHub;
use crate::message::SnapshotFrame;

/// Everything needed to build the live view of one session.
#[derive(Debug, Clone)]
pub struct SnapshotSources {
    hub: Arc<SnapshotHub>,
    reports: ReportService,
    notifications: NotificationService,
    banners: BannerService,
    banner_poll: Duration,
}

impl SnapshotSources {
    pub fn new(
        hub: Arc<SnapshotHub>,
        reports: ReportService,
        notifications: NotificationService,
        banners: BannerService,
        banner_poll: Duration,
    ) -> Self {
        Self {
            hub,
            reports,
            notifications,
            banners,
            banner_poll,
        }
    }

    pub fn hub(&self) -> &Arc<SnapshotHub> {
        &self.hub
    }

    /// Merged reports, notifications and banner frames for `ctx`.
    ///
    /// Starts with one frame per feed, then one frame per change.
    pub fn frames(&self, ctx: SessionContext) -> BoxStream<'static, SnapshotFrame> {
        let reports = {
            let service = self.reports.clone();
            let ctx = ctx.clone();
            SnapshotFeed::new(self.hub.clone(), ReportService::snapshot_topic(&ctx))
                .stream(move || {
                    let service = service.clone();
                    let ctx = ctx.clone();
                    async move { service.snapshot(&ctx).await }
                })
                .map(|result| match result {
                    Ok(reports) => SnapshotFrame::Reports { reports },
                    Err(e) => failed("reports", e),
                })
                .boxed()
        };

        let notifications = {
            let service = self.notifications.clone();
            let ctx = ctx.clone();
            SnapshotFeed::new(self.hub.clone(), Topic::UserNotifications(ctx.user_id))
                .stream(move || {
                    let service = service.clone();
                    let ctx = ctx.clone();
                    async move {
                        let notifications = service.list(&ctx).await?;
                        let unread = notifications.iter().filter(|n| !n.read).count() as u64;
                        Ok((notifications, unread))
                    }
                })
                .map(|result| match result {
                    Ok((notifications, unread)) => SnapshotFrame::Notifications {
                        notifications,
                        unread,
                    },
                    Err(e) => failed("notifications", e),
                })
                .boxed()
        };

        let banner = banner_feed(self.hub.clone(), self.banners.clone(), self.banner_poll)
            .map(|result| match result {
                Ok(state) => SnapshotFrame::Banner { state },
                Err(e) => failed("banner", e),
            })
            .boxed();

        stream::select_all([reports, notifications, banner]).boxed()
    }
}

fn failed(feed: &str, err: AppError) -> SnapshotFrame {
    warn!(feed, error = %err, "Snapshot read failed");
    SnapshotFrame::Error {
        feed: feed.to_string(),
        message: err.message,
    }
}
