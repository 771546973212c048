//! WebSocket snapshot endpoint.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::http::HeaderMap;
use axum::response::Response;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};

use lostprop_core::error::AppError;
use lostprop_realtime::SnapshotFrame;
use lostprop_realtime::message::ClientMessage;
use lostprop_service::SessionContext;

use crate::error::ApiResult;
use crate::extractors::auth::{authenticate, session_token};
use crate::state::AppState;

/// Browsers cannot set headers on a WebSocket handshake, so the token may
/// also come from the cookie or the query string.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: Option<String>,
}

/// GET /api/ws
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    headers: HeaderMap,
    Query(query): Query<WsQuery>,
) -> ApiResult<Response> {
    let token = session_token(&headers, &state.config.auth.cookie_name)
        .or(query.token)
        .ok_or_else(|| AppError::authentication("Silakan login terlebih dahulu"))?;
    let ctx = authenticate(&state, &token)?;

    Ok(ws.on_upgrade(move |socket| handle_socket(state, ctx, socket)))
}

async fn handle_socket(state: AppState, ctx: SessionContext, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut frames = state.snapshots.frames(ctx.clone());
    let period = Duration::from_secs(state.config.realtime.ping_interval_seconds.max(1));
    let mut ping = interval_at(Instant::now() + period, period);

    info!(user_id = %ctx.user_id, role = %ctx.role, "WebSocket connection established");

    loop {
        tokio::select! {
            frame = frames.next() => {
                let Some(frame) = frame else { break };
                if send(&mut ws_tx, &frame).await.is_err() {
                    break;
                }
            }
            _ = ping.tick() => {
                if send(&mut ws_tx, &SnapshotFrame::ping()).await.is_err() {
                    break;
                }
            }
            inbound = ws_rx.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    match serde_json::from_str::<ClientMessage>(text.as_str()) {
                        Ok(ClientMessage::Resync) => {
                            frames = state.snapshots.frames(ctx.clone());
                        }
                        Ok(ClientMessage::Pong { .. }) => {}
                        Err(e) => debug!(user_id = %ctx.user_id, error = %e, "Ignoring client message"),
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(user_id = %ctx.user_id, error = %e, "WebSocket error");
                    break;
                }
            }
        }
    }

    info!(user_id = %ctx.user_id, "WebSocket connection closed");
}

async fn send(
    ws_tx: &mut SplitSink<WebSocket, Message>,
    frame: &SnapshotFrame,
) -> Result<(), axum::Error> {
    match frame.to_json() {
        Ok(json) => ws_tx.send(Message::Text(json.into())).await,
        Err(e) => {
            warn!(error = %e, "Failed to encode snapshot frame");
            Ok(())
        }
    }
}
