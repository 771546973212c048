//! Staff direct messages.

use axum::Json;
use axum::extract::State;
use uuid::Uuid;

use lostprop_core::error::AppError;
use lostprop_service::notification::{Recipient, SendOutcome};

use crate::dto::request::{SendNotificationRequest, validated};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

fn parse_recipient(raw: &str) -> Result<Recipient, AppError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("all") {
        return Ok(Recipient::All);
    }
    Uuid::parse_str(raw)
        .map(Recipient::User)
        .map_err(|_| AppError::validation(format!("Penerima tidak valid: '{raw}'")))
}

/// POST /api/admin/notifications
pub async fn send_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SendNotificationRequest>,
) -> ApiResult<Json<ApiResponse<SendOutcome>>> {
    let req = validated(req)?;
    let recipient = parse_recipient(&req.recipient)?;
    let outcome = state
        .notification_service
        .send(&auth, recipient, &req.message)
        .await?;
    Ok(Json(ApiResponse::ok(outcome)))
}
