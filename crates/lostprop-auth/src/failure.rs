//! Authentication failure codes.
//!
//! Failures carry a provider-style code (`auth/invalid-credential`) and
//! map to the Indonesian message shown on the login and registration
//! pages. Codes without a specific message fall back to a generic message
//! for the flow they happened in.

use std::fmt;

use lostprop_core::AppError;
use lostprop_core::error::ErrorKind;

/// Which form the failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Register,
}

impl AuthFlow {
    /// Generic message for failures without a specific mapping.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Login => "Terjadi kesalahan saat login",
            Self::Register => "Terjadi kesalahan saat registrasi. Silakan coba lagi.",
        }
    }
}

/// A classified authentication failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// Unknown email or wrong password.
    InvalidCredential,
    /// Registration with an email that already has an account.
    EmailAlreadyInUse,
    /// Password shorter than the policy minimum.
    WeakPassword,
    /// Malformed email address.
    InvalidEmail,
    /// Any other code.
    Unknown(String),
}

impl AuthFailure {
    /// Provider-style code.
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidCredential => "auth/invalid-credential",
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::InvalidEmail => "auth/invalid-email",
            Self::Unknown(code) => code,
        }
    }

    /// Classify a provider-style code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/invalid-credential" | "auth/wrong-password" | "auth/user-not-found" => {
                Self::InvalidCredential
            }
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/weak-password" => Self::WeakPassword,
            "auth/invalid-email" => Self::InvalidEmail,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Message shown to the user.
    pub fn message(&self, flow: AuthFlow) -> &'static str {
        match self {
            Self::InvalidCredential => "Email atau password salah",
            Self::EmailAlreadyInUse => "Email sudah terdaftar",
            Self::WeakPassword => "Password terlalu lemah. Minimal 6 karakter.",
            Self::InvalidEmail => "Format email tidak valid",
            Self::Unknown(_) => flow.fallback_message(),
        }
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredential => ErrorKind::Authentication,
            Self::EmailAlreadyInUse => ErrorKind::Conflict,
            Self::WeakPassword | Self::InvalidEmail => ErrorKind::Validation,
            Self::Unknown(_) => ErrorKind::Internal,
        }
    }

    /// Convert into an application error carrying the user-facing message.
    pub fn into_error(self, flow: AuthFlow) -> AppError {
        AppError::new(self.kind(), self.message(flow))
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
