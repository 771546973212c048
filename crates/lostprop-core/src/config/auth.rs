//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session-token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token lifetime in days. Also used as the cookie max-age.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_days: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// The single address that is granted the admin role at registration.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Name of the cookie mirroring the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie is marked `Secure`.
    #[serde(default)]
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            session_ttl_days: default_session_ttl(),
            password_min_length: default_password_min(),
            admin_email: default_admin_email(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_session_ttl() -> u64 {
    30
}

fn default_password_min() -> usize {
    6
}

fn default_admin_email() -> String {
    "admin@polres.com".to_string()
}

fn default_cookie_name() -> String {
    "session".to_string()
}
