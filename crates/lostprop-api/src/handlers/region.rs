//! Region lookup handlers for the report form.

use axum::Json;
use axum::extract::{Path, State};

use lostprop_service::geography::Region;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/regions/cities
pub async fn cities(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Region>>>> {
    let regions = state.region_client.cities().await?;
    Ok(Json(ApiResponse::ok(regions)))
}

/// GET /api/regions/cities/{id}/districts
pub async fn districts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(city_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Region>>>> {
    let regions = state.region_client.districts(&city_id).await?;
    Ok(Json(ApiResponse::ok(regions)))
}

/// GET /api/regions/districts/{id}/villages
pub async fn villages(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(district_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Region>>>> {
    let regions = state.region_client.villages(&district_id).await?;
    Ok(Json(ApiResponse::ok(regions)))
}
