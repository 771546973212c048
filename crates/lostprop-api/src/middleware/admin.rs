//! Route guard for the staff area.
//!
//! Every `/api/admin` request must carry a valid session whose role claim
//! is admin. Services check the role again; this layer rejects early and
//! hands the verified user to the handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use lostprop_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::extractors::auth::{authenticate, session_token};
use crate::state::AppState;

/// Rejects requests without an admin session.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(request.headers(), &state.config.auth.cookie_name)
        .ok_or_else(|| AppError::authentication("Silakan login terlebih dahulu"))?;
    let ctx = authenticate(&state, &token)?;
    state.rbac_enforcer.require_admin(ctx.role)?;

    request.extensions_mut().insert(AuthUser(ctx));
    Ok(next.run(request).await)
}
