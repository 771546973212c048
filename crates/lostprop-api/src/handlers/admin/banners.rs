//! Staff banner handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use lostprop_entity::banner::{HeaderBanner, NewBanner};

use crate::dto::request::{CreateBannerRequest, validated};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

/// POST /api/admin/banners
pub async fn create_banner(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBannerRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<HeaderBanner>>)> {
    let req = validated(req)?;
    let banner = state
        .banner_service
        .create(
            &auth,
            NewBanner {
                message: req.message,
                start_time: req.start_time,
                end_time: req.end_time,
                active: req.active,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(banner))))
}

/// GET /api/admin/banners
pub async fn list_banners(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<RecentQuery>,
) -> ApiResult<Json<ApiResponse<Vec<HeaderBanner>>>> {
    let banners = state
        .banner_service
        .list_recent(&auth, query.limit.clamp(1, 100))
        .await?;
    Ok(Json(ApiResponse::ok(banners)))
}
