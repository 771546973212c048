//! Integration tests for notification inboxes and direct messages.

mod helpers;

use http::StatusCode;
use serde_json::Value;

use helpers::TestApp;

async fn send(app: &TestApp, admin: &str, recipient: &str, message: &str) -> Value {
    let response = app
        .request(
            "POST",
            "/api/admin/notifications",
            Some(serde_json::json!({ "recipient": recipient, "message": message })),
            Some(admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["data"].clone()
}

async fn inbox(app: &TestApp, token: &str) -> Vec<Value> {
    app.request("GET", "/api/notifications", None, Some(token))
        .await
        .body["data"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}

async fn user_id(app: &TestApp, token: &str) -> String {
    app.request("GET", "/api/auth/me", None, Some(token))
        .await
        .body["data"]["id"]
        .as_str()
        .expect("No user id")
        .to_string()
}

#[tokio::test]
async fn test_broadcast_reaches_every_citizen_but_not_staff() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let andi = app.register("Andi", "andi@example.com").await;
    let rina = app.register("Rina", "rina@example.com").await;

    let outcome = send(&app, &admin, "all", "Kantor tutup hari Minggu").await;
    assert_eq!(outcome["sent"], 2);
    assert_eq!(outcome["failed"], 0);

    for token in [&andi, &rina] {
        let notifications = inbox(&app, token).await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0]["kind"], "admin_message");
        assert_eq!(notifications[0]["message"], "Kantor tutup hari Minggu");
        assert_eq!(notifications[0]["read"], false);
    }
    assert!(inbox(&app, &admin).await.is_empty());
}

#[tokio::test]
async fn test_direct_message_to_one_user() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let andi = app.register("Andi", "andi@example.com").await;
    let rina = app.register("Rina", "rina@example.com").await;

    let andi_id = user_id(&app, &andi).await;
    let outcome = send(&app, &admin, &andi_id, "Silakan datang ke SPKT").await;
    assert_eq!(outcome["sent"], 1);

    assert_eq!(inbox(&app, &andi).await.len(), 1);
    assert!(inbox(&app, &rina).await.is_empty());
}

#[tokio::test]
async fn test_unknown_recipient_is_rejected() {
    let app = TestApp::new();
    let admin = app.admin().await;

    let response = app
        .request(
            "POST",
            "/api/admin/notifications",
            Some(serde_json::json!({ "recipient": "budi", "message": "Halo" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/admin/notifications",
            Some(serde_json::json!({
                "recipient": uuid::Uuid::new_v4().to_string(),
                "message": "Halo",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_citizen_cannot_send() {
    let app = TestApp::new();
    let andi = app.register("Andi", "andi@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/admin/notifications",
            Some(serde_json::json!({ "recipient": "all", "message": "Halo" })),
            Some(&andi),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_mark_read_and_clear_read() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let andi = app.register("Andi", "andi@example.com").await;

    for message in ["Pesan satu", "Pesan dua", "Pesan tiga"] {
        send(&app, &admin, "all", message).await;
    }

    let notifications = inbox(&app, &andi).await;
    assert_eq!(notifications.len(), 3);

    for n in notifications.iter().take(2) {
        let id = n["id"].as_str().unwrap();
        let response = app
            .request(
                "PUT",
                &format!("/api/notifications/{id}/read"),
                None,
                Some(&andi),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let unread = app
        .request("GET", "/api/notifications/unread-count", None, Some(&andi))
        .await;
    assert_eq!(unread.body["data"]["count"], 1);

    let cleared = app
        .request("DELETE", "/api/notifications/read", None, Some(&andi))
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert_eq!(cleared.body["data"]["deleted"], 2);

    let remaining = inbox(&app, &andi).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["read"], false);
}

#[tokio::test]
async fn test_cannot_touch_someone_elses_notification() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let andi = app.register("Andi", "andi@example.com").await;
    let rina = app.register("Rina", "rina@example.com").await;

    let andi_id = user_id(&app, &andi).await;
    send(&app, &admin, &andi_id, "Untuk Andi").await;
    let id = inbox(&app, &andi).await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request("PUT", &format!("/api/notifications/{id}/read"), None, Some(&rina))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/notifications/{id}"), None, Some(&rina))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/notifications/{id}"), None, Some(&andi))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(inbox(&app, &andi).await.is_empty());
}
