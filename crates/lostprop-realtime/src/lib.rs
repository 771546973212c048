//! # lostprop-realtime
//!
//! Live views over the portal's data. Writes bump a per-topic version in
//! the [`SnapshotHub`]; subscribers follow a [`SnapshotFeed`], which
//! re-reads a full snapshot whenever the version moves. A burst of writes
//! between two reads collapses into one snapshot.
//!
//! [`SnapshotSources`] combines the report, notification and banner feeds
//! of one session into a single stream of tagged [`SnapshotFrame`]s for
//! the WebSocket endpoint.

pub mod banner;
pub mod feed;
pub mod hub;
pub mod message;
pub mod session;

pub use feed::SnapshotFeed;
pub use hub::SnapshotHub;
pub use message::SnapshotFrame;
pub use session::SnapshotSources;
