//! Lazy, restartable streams of full snapshots.

use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::watch;

use lostprop_core::error::AppError;
use lostprop_core::types::Topic;

use crate::hub::SnapshotHub;

/// Follows one topic of the hub.
///
/// Nothing is read until the stream is polled. The first item is the
/// current snapshot; every later item is a fresh read after the topic
/// moved. Each call to [`stream`](Self::stream) starts over, so a dropped
/// connection resubscribes by asking again.
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    hub: Arc<SnapshotHub>,
    topic: Topic,
}

impl SnapshotFeed {
    pub fn new(hub: Arc<SnapshotHub>, topic: Topic) -> Self {
        Self { hub, topic }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Stream of `load()` results, one per observed change.
    pub fn stream<T, F, Fut>(&self, load: F) -> BoxStream<'static, Result<T, AppError>>
    where
        T: Send + 'static,
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        let rx = self.hub.subscribe(self.topic);
        follow(rx, load).boxed()
    }
}

/// Load once, then again after every change seen on `rx`.
pub(crate) fn follow<T, F, Fut>(
    rx: watch::Receiver<u64>,
    load: F,
) -> impl futures::Stream<Item = Result<T, AppError>> + Send + 'static
where
    T: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, AppError>> + Send + 'static,
{
    stream::unfold((rx, load, true), |(mut rx, mut load, first)| async move {
        if first {
            rx.borrow_and_update();
        } else if rx.changed().await.is_err() {
            return None;
        }
        let snapshot = load().await;
        Some((snapshot, (rx, load, false)))
    })
}
