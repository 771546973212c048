//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::header::HeaderMap;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use lostprop_core::config::AppConfig;
use lostprop_database::Stores;

/// Address that registers as the admin account.
pub const ADMIN_EMAIL: &str = "admin@polres.com";

/// Password used for every test account.
pub const PASSWORD: &str = "rahasia123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = "memory".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        // Nothing listens here; region lookups fail fast.
        config.geography.base_url = "http://127.0.0.1:9".to_string();
        config.geography.request_timeout_seconds = 1;

        let state = lostprop_api::AppState::build(config.clone(), Stores::memory())
            .expect("Failed to build app state");
        let router = lostprop_api::build_app(state, &config.server.cors);

        Self { router, config }
    }

    /// Register an account and return its session token
    pub async fn register(&self, full_name: &str, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "full_name": full_name,
                    "email": email,
                    "password": PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );
        token_of(&response.body)
    }

    /// Register the admin account and return its token
    pub async fn admin(&self) -> String {
        self.register("Petugas SPKT", ADMIN_EMAIL).await
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        token_of(&response.body)
    }

    /// File a report as the token's owner and return the stored report
    pub async fn submit_report(&self, token: &str, body: Value) -> Value {
        let response = self
            .request("POST", "/api/reports", Some(body), Some(token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Report submission failed: {:?}",
            response.body
        );
        response.body["data"].clone()
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let raw = self.send(method, path, body, token).await;
        let body: Value = serde_json::from_slice(&raw.bytes).unwrap_or(Value::Null);

        TestResponse {
            status: raw.status,
            headers: raw.headers,
            body,
        }
    }

    /// Make a request and keep the body as bytes
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> RawResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        RawResponse {
            status,
            headers,
            bytes,
        }
    }
}

/// Minimal valid report body for `name`
pub fn report_body(name: &str, nik: &str) -> Value {
    serde_json::json!({
        "name": name,
        "identity_type": "ktp",
        "national_id": nik,
        "birth_place": "Payakumbuh",
        "sex": "l",
        "nationality": "wni",
        "address": "Jl. Sudirman No. 1",
        "phone": "081234567890",
        "location_category": "jalan",
        "city": "Kota Payakumbuh",
        "district": "Payakumbuh Barat",
        "village": "Koto Baru",
        "location": "Depan pasar",
        "description": "Dompet terjatuh saat berbelanja",
        "destination_office": "polres",
        "items": [],
        "attachments": [],
    })
}

fn token_of(body: &Value) -> String {
    body["data"]["token"]
        .as_str()
        .expect("No token in auth response")
        .to_string()
}

/// Response from a JSON test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

/// Response with the body left unparsed
#[derive(Debug)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body bytes
    pub bytes: Vec<u8>,
}
