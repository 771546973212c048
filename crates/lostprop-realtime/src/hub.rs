//! Per-topic version counters.

use dashmap::DashMap;
use tokio::sync::watch;
use tracing::trace;

use lostprop_core::traits::ChangeNotifier;
use lostprop_core::types::Topic;

/// Registry of topic versions.
///
/// Each topic owns a `watch` channel carrying a counter. Notifying a topic
/// increments it; followers only learn that it moved and re-read.
///
/// Per-user topics live only while someone follows them. A notify on an
/// unfollowed per-user topic drops its entry, and `subscribe` sweeps the
/// ones whose followers have all gone.
#[derive(Debug, Default)]
pub struct SnapshotHub {
    topics: DashMap<Topic, watch::Sender<u64>>,
}

impl SnapshotHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow `topic`, creating it on first use.
    pub fn subscribe(&self, topic: Topic) -> watch::Receiver<u64> {
        self.prune_idle();
        self.topics
            .entry(topic)
            .or_insert_with(|| watch::channel(0).0)
            .subscribe()
    }

    /// Current version of `topic`; zero if it never changed.
    pub fn version(&self, topic: Topic) -> u64 {
        self.topics.get(&topic).map(|tx| *tx.borrow()).unwrap_or(0)
    }

    /// Number of topics currently tracked.
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Drop per-user topics nobody follows any more.
    pub fn prune_idle(&self) {
        self.topics
            .retain(|topic, tx| !topic.is_per_user() || tx.receiver_count() > 0);
    }
}

impl ChangeNotifier for SnapshotHub {
    fn notify(&self, topic: Topic) {
        {
            let tx = self
                .topics
                .entry(topic)
                .or_insert_with(|| watch::channel(0).0);
            tx.send_modify(|version| *version += 1);
            trace!(%topic, version = *tx.borrow(), "Topic changed");
        }
        if topic.is_per_user() {
            self.topics
                .remove_if(&topic, |_, tx| tx.receiver_count() == 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_notify_bumps_only_that_topic() {
        let hub = SnapshotHub::new();
        let user = Uuid::new_v4();
        let _rx = hub.subscribe(Topic::UserReports(user));
        hub.notify_all(&[Topic::UserReports(user), Topic::AllReports]);
        hub.notify(Topic::AllReports);

        assert_eq!(hub.version(Topic::AllReports), 2);
        assert_eq!(hub.version(Topic::UserReports(user)), 1);
        assert_eq!(hub.version(Topic::ActiveBanner), 0);
    }

    #[tokio::test]
    async fn test_subscriber_sees_change() {
        let hub = SnapshotHub::new();
        let mut rx = hub.subscribe(Topic::ActiveBanner);
        assert!(!rx.has_changed().unwrap());

        hub.notify(Topic::ActiveBanner);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
    }

    #[test]
    fn test_unfollowed_user_topics_are_dropped() {
        let hub = SnapshotHub::new();
        let idle = Uuid::new_v4();
        hub.notify(Topic::UserNotifications(idle));
        hub.notify(Topic::AllReports);
        assert_eq!(hub.topic_count(), 1);

        let rx = hub.subscribe(Topic::UserReports(idle));
        hub.notify(Topic::UserReports(idle));
        assert_eq!(hub.topic_count(), 2);
        assert_eq!(hub.version(Topic::UserReports(idle)), 1);

        drop(rx);
        hub.prune_idle();
        assert_eq!(hub.topic_count(), 1);
        assert_eq!(hub.version(Topic::AllReports), 1);
    }
}
