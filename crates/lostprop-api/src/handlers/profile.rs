//! Profile handlers.

use axum::Json;
use axum::extract::State;

use lostprop_entity::user::{UpdateProfile, User};

use crate::dto::request::{UpdateProfileRequest, validated};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let req = validated(req)?;
    let changes = UpdateProfile {
        display_name: req.display_name,
        phone_number: req.phone_number,
        address: req.address,
        nik: req.nik,
    };
    let user = state.user_service.update_profile(&auth, changes).await?;
    Ok(Json(ApiResponse::ok(user)))
}
