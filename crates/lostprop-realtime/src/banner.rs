//! Header banner watcher.
//!
//! Banner visibility depends on the clock as well as on writes, so this
//! feed re-evaluates on a fixed tick in addition to topic changes.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use lostprop_core::error::AppError;
use lostprop_core::types::Topic;
use lostprop_entity::banner::BannerState;
use lostprop_service::BannerService;

use crate::hub::SnapshotHub;

/// Banner states: once on subscribe, on every banner write, and every `poll`.
pub fn banner_feed(
    hub: Arc<SnapshotHub>,
    banners: BannerService,
    poll: Duration,
) -> BoxStream<'static, Result<BannerState, AppError>> {
    let rx = hub.subscribe(Topic::ActiveBanner);
    let mut ticker = interval_at(Instant::now() + poll, poll);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    stream::unfold(
        (rx, ticker, banners, true),
        |(mut rx, mut ticker, banners, first)| async move {
            if first {
                rx.borrow_and_update();
            } else {
                tokio::select! {
                    changed = rx.changed() => {
                        if changed.is_err() {
                            return None;
                        }
                        debug!("Banner changed");
                    }
                    _ = ticker.tick() => {}
                }
            }
            let state = banners.state().await;
            Some((state, (rx, ticker, banners, false)))
        },
    )
    .boxed()
}
