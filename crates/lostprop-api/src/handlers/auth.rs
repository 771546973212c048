//! Auth handlers: register, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use lostprop_core::config::AuthConfig;
use lostprop_entity::user::User;
use lostprop_service::user::{AuthSession, LoginInput, RegisterInput};

use crate::dto::request::{LoginRequest, RegisterRequest, validated};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

type SignedIn = (StatusCode, CookieJar, Json<ApiResponse<AuthSession>>);

/// Cookie carrying the session token.
pub fn session_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    let seconds = config.session_ttl_days.saturating_mul(24 * 60 * 60);
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .max_age(Duration::seconds(i64::try_from(seconds).unwrap_or(i64::MAX)))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}

fn signed_in(
    config: &AuthConfig,
    jar: CookieJar,
    status: StatusCode,
    session: AuthSession,
) -> SignedIn {
    let jar = jar.add(session_cookie(config, session.token.token.clone()));
    (status, jar, Json(ApiResponse::ok(session)))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<SignedIn> {
    let req = validated(req)?;
    let session = state
        .account_service
        .register(RegisterInput {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok(signed_in(&state.config.auth, jar, StatusCode::CREATED, session))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<SignedIn> {
    let req = validated(req)?;
    let session = state
        .account_service
        .login(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok(signed_in(&state.config.auth, jar, StatusCode::OK, session))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; logging out only drops the cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let removal = Cookie::build((state.config.auth.cookie_name.clone(), "")).path("/");
    (
        jar.remove(removal),
        Json(ApiResponse::ok(MessageResponse::new("Berhasil logout"))),
    )
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let config = AuthConfig::default();
        let cookie = session_cookie(&config, "abc".to_string());
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(30)));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_secure_flag_follows_config() {
        let config = AuthConfig {
            cookie_secure: true,
            ..AuthConfig::default()
        };
        let header = session_cookie(&config, "abc".to_string()).to_string();
        assert!(header.starts_with("session=abc"));
        assert!(header.contains("Secure"));
    }

    #[test]
    fn test_logout_jar_expires_cookie() {
        use axum::response::IntoResponse;

        let removal = Cookie::build("session").path("/");
        let response = CookieJar::new().remove(removal).into_response();
        let headers: Vec<String> = response
            .headers()
            .get_all(axum::http::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect();
        assert_eq!(headers.len(), 1);
        assert!(headers[0].starts_with("session="));
        assert!(headers[0].contains("Max-Age=0"));
    }
}
