//! Change notification seam between the service layer and real-time feeds.

use crate::types::topic::Topic;

/// Receives "something under this topic changed" signals.
///
/// Services call this after every successful write. Implementations must
/// not block: the real-time hub only bumps a version counter and lets
/// subscribers re-read their snapshot lazily.
pub trait ChangeNotifier: Send + Sync + std::fmt::Debug + 'static {
    /// Signal that the data behind `topic` changed.
    fn notify(&self, topic: Topic);

    /// Signal several topics at once.
    fn notify_all(&self, topics: &[Topic]) {
        for topic in topics {
            self.notify(*topic);
        }
    }
}
