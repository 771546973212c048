//! Frames pushed to WebSocket clients.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use lostprop_entity::banner::BannerState;
use lostprop_entity::notification::Notification;
use lostprop_entity::report::Report;

/// One server-to-client frame. Each snapshot frame replaces the client's
/// copy of that list wholesale.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SnapshotFrame {
    /// The reports the session follows.
    Reports { reports: Vec<Report> },
    /// The session's inbox.
    Notifications {
        notifications: Vec<Notification>,
        unread: u64,
    },
    /// Header banner state.
    Banner { state: BannerState },
    /// A snapshot could not be read. The feed keeps running.
    Error { feed: String, message: String },
    /// Keepalive.
    Ping { timestamp: i64 },
}

impl SnapshotFrame {
    pub fn ping() -> Self {
        Self::Ping {
            timestamp: Utc::now().timestamp(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Messages a client may send.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Reply to a ping.
    Pong {
        #[serde(default)]
        timestamp: i64,
    },
    /// Ask for fresh copies of every feed.
    Resync,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_tagged() {
        let frame = SnapshotFrame::Reports { reports: vec![] };
        let json: serde_json::Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "reports");
        assert!(json["reports"].as_array().unwrap().is_empty());

        let frame = SnapshotFrame::Banner {
            state: BannerState::default(),
        };
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["type"], "banner");
        assert_eq!(json["state"]["visible"], false);
    }

    #[test]
    fn test_client_messages() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"resync"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Resync));
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"pong"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Pong { timestamp: 0 }));
    }
}
