//! Staff report handlers: listing, review, summary, register export.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use uuid::Uuid;

use lostprop_core::types::PageResponse;
use lostprop_entity::report::{Report, ReportSummary};
use lostprop_service::report::{ReviewInput, ReviewOutcome};

use crate::dto::request::{ReviewRequest, validated};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ListQuery};
use crate::handlers::attachment;
use crate::state::AppState;

/// GET /api/admin/reports
pub async fn list_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<Report>>>> {
    let filter = query.filter()?;
    let page = state
        .report_service
        .list_all(&auth, &filter, &query.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/reports/summary
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<ReportSummary>>> {
    let summary = state.report_service.summary_all(&auth).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/admin/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Report>>> {
    let report = state.report_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// PUT /api/admin/reports/{id}/review
pub async fn review_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> ApiResult<Json<ApiResponse<ReviewOutcome>>> {
    let req = validated(req)?;
    let outcome = state
        .review_service
        .review(
            &auth,
            id,
            ReviewInput {
                status: req.status,
                note: req.note,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// GET /api/admin/reports/export
///
/// Takes the same `status`/`search` parameters as the listing.
pub async fn export_register(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Response> {
    let filter = query.filter()?;
    let doc = state.export_service.register_pdf(&auth, &filter).await?;
    Ok(attachment(doc))
}
