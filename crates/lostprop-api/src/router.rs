//! Route definitions for the portal HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(report_routes())
        .merge(notification_routes())
        .merge(public_routes())
        .merge(region_routes())
        .nest("/admin", admin_routes(state.clone()));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Profile self-service
fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(handlers::profile::get_profile).put(handlers::profile::update_profile),
    )
}

/// Citizen reports
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports",
            get(handlers::report::list_reports).post(handlers::report::create_report),
        )
        .route("/reports/summary", get(handlers::report::summary))
        .route(
            "/reports/{id}",
            get(handlers::report::get_report).delete(handlers::report::delete_report),
        )
        .route("/reports/{id}/pdf", get(handlers::report::download_pdf))
}

/// Notification inbox
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read",
            delete(handlers::notification::delete_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete_notification),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Unauthenticated endpoints, plus the WebSocket which authenticates itself
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
        .route("/banner", get(handlers::banner::current_banner))
        .route("/ws", get(handlers::ws::ws_upgrade))
}

/// Region lookups for the report form
fn region_routes() -> Router<AppState> {
    Router::new()
        .route("/regions/cities", get(handlers::region::cities))
        .route(
            "/regions/cities/{id}/districts",
            get(handlers::region::districts),
        )
        .route(
            "/regions/districts/{id}/villages",
            get(handlers::region::villages),
        )
}

/// Staff area, behind the admin guard
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/reports", get(handlers::admin::reports::list_reports))
        .route("/reports/summary", get(handlers::admin::reports::summary))
        .route(
            "/reports/export",
            get(handlers::admin::reports::export_register),
        )
        .route("/reports/{id}", get(handlers::admin::reports::get_report))
        .route(
            "/reports/{id}/review",
            put(handlers::admin::reports::review_report),
        )
        .route(
            "/notifications",
            post(handlers::admin::notifications::send_notification),
        )
        .route(
            "/banners",
            get(handlers::admin::banners::list_banners).post(handlers::admin::banners::create_banner),
        )
        .route("/users", get(handlers::admin::users::list_users))
        .route(
            "/users/recipients",
            get(handlers::admin::users::list_recipients),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::admin::require_admin,
        ))
}
