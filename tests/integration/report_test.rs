//! Integration tests for report submission, review and export.

mod helpers;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::StatusCode;

use helpers::{TestApp, report_body};

#[tokio::test]
async fn test_new_report_is_pending_whatever_the_client_sends() {
    let app = TestApp::new();
    let token = app.register("Andi Saputra", "andi@example.com").await;

    let mut body = report_body("Andi Saputra", "1376010101900001");
    body["status"] = serde_json::json!("selesai");
    body["items"] = serde_json::json!([
        { "code": "DOK", "type": "KTP", "unit": "lembar", "quantity": 1 },
        { "code": "ELK", "type": "Handphone", "unit": "unit", "quantity": 1 },
    ]);
    let report = app.submit_report(&token, body).await;

    assert_eq!(report["status"], "pending");
    assert_eq!(report["items"].as_array().map(Vec::len), Some(2));
    assert!(report["admin_note"].is_null());
}

#[tokio::test]
async fn test_report_requires_login() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/reports",
            Some(report_body("Andi", "1376010101900001")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_oversized_attachment_is_rejected() {
    let app = TestApp::new();
    let token = app.register("Andi", "andi@example.com").await;

    let payload = STANDARD.encode(vec![0u8; 1024 * 1024 + 1]);
    let mut body = report_body("Andi", "1376010101900001");
    body["attachments"] = serde_json::json!([{
        "name": "foto.jpg",
        "type": "image/jpeg",
        "data": format!("data:image/jpeg;base64,{payload}"),
    }]);

    let response = app
        .request("POST", "/api/reports", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.body["message"],
        "File foto.jpg terlalu besar. Maksimal ukuran file adalah 1MB"
    );

    let list = app.request("GET", "/api/reports", None, Some(&token)).await;
    assert_eq!(list.body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_attachment_must_be_image_or_pdf() {
    let app = TestApp::new();
    let token = app.register("Andi", "andi@example.com").await;

    let mut body = report_body("Andi", "1376010101900001");
    body["attachments"] = serde_json::json!([{
        "name": "catatan.txt",
        "type": "text/plain",
        "data": STANDARD.encode(b"halo"),
    }]);

    let response = app
        .request("POST", "/api/reports", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_citizen_sees_only_own_reports() {
    let app = TestApp::new();
    let andi = app.register("Andi", "andi@example.com").await;
    let rina = app.register("Rina", "rina@example.com").await;

    let andi_report = app
        .submit_report(&andi, report_body("Andi", "1376010101900001"))
        .await;
    app.submit_report(&rina, report_body("Rina", "1376020202910002"))
        .await;

    let list = app.request("GET", "/api/reports", None, Some(&andi)).await;
    let reports = list.body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["name"], "Andi");

    let id = andi_report["id"].as_str().unwrap();
    let other = app
        .request("GET", &format!("/api/reports/{id}"), None, Some(&rina))
        .await;
    assert_eq!(other.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_filter_by_status_and_search() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let citizen = app.register("Warga", "warga@example.com").await;

    app.submit_report(&citizen, report_body("Andi Saputra", "1376010101900001"))
        .await;
    app.submit_report(&citizen, report_body("Rina Wati", "1376020202910002"))
        .await;
    let third = app
        .submit_report(&citizen, report_body("andi pratama", "1376030303920003"))
        .await;

    let id = third["id"].as_str().unwrap();
    let review = app
        .request(
            "PUT",
            &format!("/api/admin/reports/{id}/review"),
            Some(serde_json::json!({ "status": "ditolak", "note": "Data tidak lengkap" })),
            Some(&admin),
        )
        .await;
    assert_eq!(review.status, StatusCode::OK);

    let by_name = app
        .request("GET", "/api/admin/reports?search=ANDI", None, Some(&admin))
        .await;
    assert_eq!(by_name.status, StatusCode::OK);
    assert_eq!(by_name.body["data"]["total_items"], 2);

    let combined = app
        .request(
            "GET",
            "/api/admin/reports?status=ditolak&q=andi",
            None,
            Some(&admin),
        )
        .await;
    let items = combined.body["data"]["items"].as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "andi pratama");

    let by_nik = app
        .request("GET", "/api/admin/reports?search=0202", None, Some(&admin))
        .await;
    assert_eq!(by_nik.body["data"]["total_items"], 1);

    let bad = app
        .request("GET", "/api/admin/reports?status=hilang", None, Some(&admin))
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_review_notifies_owner_and_locks_terminal_reports() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let citizen = app.register("Andi", "andi@example.com").await;

    let report = app
        .submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;
    let id = report["id"].as_str().unwrap().to_string();
    let review_path = format!("/api/admin/reports/{id}/review");

    let processing = app
        .request(
            "PUT",
            &review_path,
            Some(serde_json::json!({ "status": "diproses" })),
            Some(&admin),
        )
        .await;
    assert_eq!(processing.status, StatusCode::OK);
    assert_eq!(processing.body["data"]["report"]["status"], "diproses");

    let done = app
        .request(
            "PUT",
            &review_path,
            Some(serde_json::json!({ "status": "selesai", "note": "Surat dapat diambil" })),
            Some(&admin),
        )
        .await;
    assert_eq!(done.status, StatusCode::OK);
    assert_eq!(done.body["data"]["report"]["status"], "selesai");
    assert_eq!(done.body["data"]["report"]["admin_note"], "Surat dapat diambil");
    assert_eq!(done.body["data"]["notification"]["message"], "Surat dapat diambil");

    let again = app
        .request(
            "PUT",
            &review_path,
            Some(serde_json::json!({ "status": "ditolak" })),
            Some(&admin),
        )
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let inbox = app
        .request("GET", "/api/notifications", None, Some(&citizen))
        .await;
    let notifications = inbox.body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| n["report_id"] == id.as_str()));

    let unread = app
        .request("GET", "/api/notifications/unread-count", None, Some(&citizen))
        .await;
    assert_eq!(unread.body["data"]["count"], 2);
}

#[tokio::test]
async fn test_review_back_to_pending_is_rejected() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let citizen = app.register("Andi", "andi@example.com").await;
    let report = app
        .submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;
    let id = report["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/reports/{id}/review"),
            Some(serde_json::json!({ "status": "pending" })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_citizen_cannot_review() {
    let app = TestApp::new();
    let citizen = app.register("Andi", "andi@example.com").await;
    let report = app
        .submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;
    let id = report["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/reports/{id}/review"),
            Some(serde_json::json!({ "status": "selesai" })),
            Some(&citizen),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_summary_counts_by_status() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let citizen = app.register("Andi", "andi@example.com").await;

    let first = app
        .submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;
    app.submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;

    let id = first["id"].as_str().unwrap();
    app.request(
        "PUT",
        &format!("/api/admin/reports/{id}/review"),
        Some(serde_json::json!({ "status": "selesai" })),
        Some(&admin),
    )
    .await;

    let summary = app
        .request("GET", "/api/reports/summary", None, Some(&citizen))
        .await;
    assert_eq!(summary.status, StatusCode::OK);
    assert_eq!(summary.body["data"]["total"], 2);
    assert_eq!(summary.body["data"]["pending"], 1);
    assert_eq!(summary.body["data"]["completed"], 1);
}

#[tokio::test]
async fn test_owner_can_delete_report() {
    let app = TestApp::new();
    let citizen = app.register("Andi", "andi@example.com").await;
    let stranger = app.register("Rina", "rina@example.com").await;
    let report = app
        .submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;
    let path = format!("/api/reports/{}", report["id"].as_str().unwrap());

    let denied = app.request("DELETE", &path, None, Some(&stranger)).await;
    assert_eq!(denied.status, StatusCode::NOT_FOUND);

    let deleted = app.request("DELETE", &path, None, Some(&citizen)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&citizen)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_report_pdf_download() {
    let app = TestApp::new();
    let citizen = app.register("Andi", "andi@example.com").await;
    let report = app
        .submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;
    let id = report["id"].as_str().unwrap();

    let response = app
        .send("GET", &format!("/api/reports/{id}/pdf"), None, Some(&citizen))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(http::header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let disposition = response
        .headers
        .get(http::header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains(&format!("Laporan_{id}_")));
    assert!(response.bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_register_export_is_admin_only() {
    let app = TestApp::new();
    let admin = app.admin().await;
    let citizen = app.register("Andi", "andi@example.com").await;
    app.submit_report(&citizen, report_body("Andi", "1376010101900001"))
        .await;

    let denied = app
        .send("GET", "/api/admin/reports/export", None, Some(&citizen))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let response = app
        .send("GET", "/api/admin/reports/export", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.bytes.starts_with(b"%PDF-"));
}
