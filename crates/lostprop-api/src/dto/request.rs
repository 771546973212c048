//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use lostprop_core::error::AppError;
use lostprop_entity::report::ReportStatus;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 200, message = "Nama lengkap wajib diisi"))]
    pub full_name: String,
    #[validate(email(message = "Format email tidak valid"))]
    pub email: String,
    /// Strength is checked by the account service.
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email wajib diisi"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password wajib diisi"))]
    pub password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 16, message = "NIK maksimal 16 digit"))]
    pub nik: Option<String>,
}

/// Review request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    pub status: ReportStatus,
    #[validate(length(max = 1000, message = "Catatan maksimal 1000 karakter"))]
    #[serde(default)]
    pub note: Option<String>,
}

/// Direct message request (admin). `recipient` is a user id or `all`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendNotificationRequest {
    #[validate(length(min = 1, message = "Penerima wajib dipilih"))]
    pub recipient: String,
    #[validate(length(min = 1, max = 1000, message = "Pesan wajib diisi"))]
    pub message: String,
}

/// Banner creation request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBannerRequest {
    #[validate(length(min = 1, max = 500, message = "Pesan wajib diisi"))]
    pub message: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Run `validator` rules and turn the first failure into a 400.
pub fn validated<T: Validate>(body: T) -> Result<T, AppError> {
    if let Err(errors) = body.validate() {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| errs.iter().map(move |e| (field.clone(), e)))
            .map(|(field, e)| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Isian {field} tidak valid"))
            })
            .next()
            .unwrap_or_else(|| "Data tidak valid".to_string());
        return Err(AppError::validation(message));
    }
    Ok(body)
}
