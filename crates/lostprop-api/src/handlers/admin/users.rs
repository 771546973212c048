//! Staff user listings.

use axum::Json;
use axum::extract::State;

use lostprop_entity::user::User;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<User>>>> {
    let users = state.user_service.list_users(&auth).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/admin/users/recipients
pub async fn list_recipients(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<User>>>> {
    let users = state.user_service.list_recipients(&auth).await?;
    Ok(Json(ApiResponse::ok(users)))
}
