//! Integration tests for the header banner.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_no_banner_by_default() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/banner", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["banner"].is_null());
    assert_eq!(response.body["data"]["visible"], false);
}

#[tokio::test]
async fn test_all_day_banner_is_visible() {
    let app = TestApp::new();
    let admin = app.admin().await;

    let created = app
        .request(
            "POST",
            "/api/admin/banners",
            Some(serde_json::json!({
                "message": "Pelayanan SKCK pindah ke gedung B",
                "start_time": "00:00",
                "end_time": "23:59",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["active"], true);

    let response = app.request("GET", "/api/banner", None, None).await;
    assert_eq!(
        response.body["data"]["banner"]["message"],
        "Pelayanan SKCK pindah ke gedung B"
    );
    assert_eq!(response.body["data"]["visible"], true);
}

#[tokio::test]
async fn test_newest_active_banner_wins() {
    let app = TestApp::new();
    let admin = app.admin().await;

    for (message, active) in [("Lama", true), ("Baru", true), ("Draf", false)] {
        let response = app
            .request(
                "POST",
                "/api/admin/banners",
                Some(serde_json::json!({
                    "message": message,
                    "start_time": "00:00",
                    "end_time": "23:59",
                    "active": active,
                })),
                Some(&admin),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app.request("GET", "/api/banner", None, None).await;
    assert_eq!(response.body["data"]["banner"]["message"], "Baru");

    let recent = app
        .request("GET", "/api/admin/banners?limit=2", None, Some(&admin))
        .await;
    assert_eq!(recent.body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_midnight_crossing_banner_is_stored_but_hidden() {
    let app = TestApp::new();
    let admin = app.admin().await;

    let created = app
        .request(
            "POST",
            "/api/admin/banners",
            Some(serde_json::json!({
                "message": "Shift malam",
                "start_time": "22:00",
                "end_time": "02:00",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let response = app.request("GET", "/api/banner", None, None).await;
    assert_eq!(response.body["data"]["banner"]["message"], "Shift malam");
    assert_eq!(response.body["data"]["visible"], false);
}

#[tokio::test]
async fn test_malformed_time_is_rejected() {
    let app = TestApp::new();
    let admin = app.admin().await;

    let response = app
        .request(
            "POST",
            "/api/admin/banners",
            Some(serde_json::json!({
                "message": "Salah jam",
                "start_time": "25:00",
                "end_time": "26:00",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_routes_are_guarded() {
    let app = TestApp::new();
    let citizen = app.register("Andi", "andi@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/admin/banners",
            Some(serde_json::json!({
                "message": "Bukan admin",
                "start_time": "08:00",
                "end_time": "12:00",
            })),
            Some(&citizen),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/api/admin/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/admin/users", None, Some(&citizen))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
