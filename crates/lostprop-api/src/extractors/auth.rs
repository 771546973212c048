//! `AuthUser` extractor: pulls the session token from the Authorization
//! header or the session cookie, validates it, and injects the context.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use lostprop_core::error::AppError;
use lostprop_service::SessionContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionContext);

impl AuthUser {
    /// Returns the inner `SessionContext`.
    pub fn context(&self) -> &SessionContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = SessionContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bearer token if present, otherwise the session cookie.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let bearer = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

/// Validate `token` and build the session context from its claims.
pub fn authenticate(state: &AppState, token: &str) -> Result<SessionContext, AppError> {
    let claims = state.jwt_decoder.decode(token)?;
    Ok(SessionContext::new(claims.user_id(), claims.email, claims.role))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // already verified by the admin guard
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let token = session_token(&parts.headers, &state.config.auth.cookie_name)
            .ok_or_else(|| AppError::authentication("Silakan login terlebih dahulu"))?;
        let ctx = authenticate(state, &token)?;
        Ok(AuthUser(ctx))
    }
}
