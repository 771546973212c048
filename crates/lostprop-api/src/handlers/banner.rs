//! Public banner handler.

use axum::Json;
use axum::extract::State;

use lostprop_entity::banner::BannerState;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/banner
///
/// Public: the header is shown on the landing page too.
pub async fn current_banner(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<BannerState>>> {
    let banner = state.banner_service.state().await?;
    Ok(Json(ApiResponse::ok(banner)))
}
