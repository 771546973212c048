//! Password policy: a minimum length, nothing else.

use lostprop_core::config::AuthConfig;

use crate::failure::AuthFailure;

/// Validates new passwords against the configured minimum length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> Result<(), AuthFailure> {
        if password.chars().count() < self.min_length {
            return Err(AuthFailure::WeakPassword);
        }
        Ok(())
    }
}
