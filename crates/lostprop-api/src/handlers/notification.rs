//! Notification inbox handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use lostprop_entity::notification::Notification;

use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Notification>>>> {
    let notifications = state.notification_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<CountResponse>>> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.notification_service.mark_read(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Notifikasi ditandai sudah dibaca",
    ))))
}

/// DELETE /api/notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.notification_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Notifikasi dihapus",
    ))))
}

/// DELETE /api/notifications/read
pub async fn delete_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let deleted = state.notification_service.delete_all_read(&auth).await?;
    Ok(Json(json!({ "success": true, "data": { "deleted": deleted } })))
}
