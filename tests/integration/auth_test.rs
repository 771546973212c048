//! Integration tests for registration, login and sessions.

mod helpers;

use http::StatusCode;

use helpers::{ADMIN_EMAIL, PASSWORD, TestApp};

#[tokio::test]
async fn test_register_sets_cookie_and_user_role() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "full_name": "Rina Wati",
                "email": "Rina@Example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["user"]["email"], "rina@example.com");
    assert_eq!(response.body["data"]["user"]["role"], "user");
    assert!(response.body["data"]["user"].get("password_hash").is_none());

    let cookie = response
        .headers
        .get(http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("No session cookie");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_admin_email_gets_admin_role() {
    let app = TestApp::new();
    let token = app.admin().await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], ADMIN_EMAIL);
    assert_eq!(response.body["data"]["role"], "admin");
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = TestApp::new();
    app.register("Budi", "budi@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "full_name": "Budi Lain",
                "email": "budi@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Email sudah terdaftar");
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "full_name": "Sari",
                "email": "sari@example.com",
                "password": "123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Password terlalu lemah. Minimal 6 karakter."
    );
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register("Andi", "andi@example.com").await;

    let token = app.login("andi@example.com", PASSWORD).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new();
    app.register("Andi", "andi@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "andi@example.com",
                "password": "salah-sekali",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Email atau password salah");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response
        .headers
        .get(http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("No cookie header");
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_profile_update_round_trip() {
    let app = TestApp::new();
    let token = app.register("Dewi", "dewi@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/profile",
            Some(serde_json::json!({
                "display_name": "Dewi S.",
                "phone_number": "08123",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/profile", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["display_name"], "Dewi S.");
    assert_eq!(response.body["data"]["phone_number"], "08123");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/health/detailed", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["backend"], "memory");
}
