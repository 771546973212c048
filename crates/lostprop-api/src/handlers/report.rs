//! Citizen report handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use uuid::Uuid;

use lostprop_entity::report::{NewReport, Report, ReportSummary};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ListQuery};
use crate::handlers::attachment;
use crate::state::AppState;

/// POST /api/reports
pub async fn create_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<NewReport>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Report>>)> {
    let report = state.report_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(report))))
}

/// GET /api/reports
pub async fn list_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Report>>>> {
    let filter = query.filter()?;
    let reports = state.report_service.list_mine(&auth, &filter).await?;
    Ok(Json(ApiResponse::ok(reports)))
}

/// GET /api/reports/summary
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<ReportSummary>>> {
    let summary = state.report_service.summary_mine(&auth).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Report>>> {
    let report = state.report_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// DELETE /api/reports/{id}
pub async fn delete_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.report_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Laporan berhasil dihapus",
    ))))
}

/// GET /api/reports/{id}/pdf
pub async fn download_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    let doc = state.export_service.report_pdf(&auth, id).await?;
    Ok(attachment(doc))
}
