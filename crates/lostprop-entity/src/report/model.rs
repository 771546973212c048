//! Report entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::attachment::Attachment;
use super::item::LostItem;
use super::status::ReportStatus;

/// A citizen-submitted lost-property report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    /// Unique report identifier.
    pub id: Uuid,
    /// Submitting account.
    pub user_id: Uuid,
    /// When the report was filed.
    pub report_date: DateTime<Utc>,
    /// Processing state. Rows written before the column existed read as pending.
    #[serde(default)]
    pub status: ReportStatus,

    // ── Reporter ─────────────────────────────────────────────
    /// Reporter's full name.
    pub name: String,
    /// Identity document type: ktp, sim, paspor, kk.
    pub identity_type: String,
    /// Identity number (NIK).
    pub national_id: String,
    /// Place of birth.
    pub birth_place: String,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Religion.
    pub religion: String,
    /// Sex: `l` or `p`.
    pub sex: String,
    /// Nationality: `wni` or `wna`.
    pub nationality: String,
    /// Occupation.
    pub occupation: String,
    /// Home address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,

    // ── Loss ─────────────────────────────────────────────────
    /// When the loss happened.
    pub lost_at: Option<DateTime<Utc>>,
    /// Kind of place (jalan, rumah, kantor, ...).
    pub location_category: String,
    /// City/regency name.
    pub city: String,
    /// District name.
    pub district: String,
    /// Village name.
    pub village: String,
    /// Free-text location.
    pub location: String,
    /// What happened.
    pub description: String,
    /// Estimated loss, as entered.
    pub loss_value: String,
    /// Office the report is addressed to: polres, polsek, polda.
    pub destination_office: String,

    /// Lost items in entry order.
    #[serde(default)]
    pub items: Json<Vec<LostItem>>,
    /// Inline attachments in entry order.
    #[serde(default)]
    pub attachments: Json<Vec<Attachment>>,

    // ── Review ───────────────────────────────────────────────
    /// Note written by staff with the last status change.
    pub admin_note: Option<String>,
    /// When staff last changed the status.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Build a new pending report from a submission.
    ///
    /// The status is always set here; callers cannot choose it.
    pub fn from_submission(submission: NewReport, user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            report_date: now,
            status: ReportStatus::Pending,
            name: submission.name,
            identity_type: submission.identity_type,
            national_id: submission.national_id,
            birth_place: submission.birth_place,
            birth_date: submission.birth_date,
            religion: submission.religion,
            sex: submission.sex,
            nationality: submission.nationality,
            occupation: submission.occupation,
            address: submission.address,
            phone: submission.phone,
            lost_at: submission.lost_at,
            location_category: submission.location_category,
            city: submission.city,
            district: submission.district,
            village: submission.village,
            location: submission.location,
            description: submission.description,
            loss_value: submission.loss_value,
            destination_office: submission.destination_office,
            items: Json(submission.items),
            attachments: Json(submission.attachments),
            admin_note: None,
            reviewed_at: None,
            created_at: now,
        }
    }

    /// Whether the review control is available for this report.
    pub fn review_enabled(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Whether `user_id` submitted this report.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Lost items.
    pub fn items(&self) -> &[LostItem] {
        &self.items.0
    }

    /// Attachments.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments.0
    }

    /// Full place of loss, from the most to the least specific part.
    pub fn full_location(&self) -> String {
        [
            self.location.as_str(),
            self.village.as_str(),
            self.district.as_str(),
            self.city.as_str(),
        ]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Everything a citizen submits. Status, ownership and timestamps are
/// deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReport {
    /// Reporter's full name.
    pub name: String,
    /// Identity document type.
    #[serde(default)]
    pub identity_type: String,
    /// Identity number (NIK).
    pub national_id: String,
    /// Place of birth.
    #[serde(default)]
    pub birth_place: String,
    /// Date of birth.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Religion.
    #[serde(default)]
    pub religion: String,
    /// Sex: `l` or `p`.
    #[serde(default)]
    pub sex: String,
    /// Nationality: `wni` or `wna`.
    #[serde(default)]
    pub nationality: String,
    /// Occupation.
    #[serde(default)]
    pub occupation: String,
    /// Home address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// When the loss happened.
    #[serde(default)]
    pub lost_at: Option<DateTime<Utc>>,
    /// Kind of place.
    #[serde(default)]
    pub location_category: String,
    /// City/regency name.
    #[serde(default)]
    pub city: String,
    /// District name.
    #[serde(default)]
    pub district: String,
    /// Village name.
    #[serde(default)]
    pub village: String,
    /// Free-text location.
    #[serde(default)]
    pub location: String,
    /// What happened.
    #[serde(default)]
    pub description: String,
    /// Estimated loss.
    #[serde(default)]
    pub loss_value: String,
    /// Destination office.
    #[serde(default)]
    pub destination_office: String,
    /// Lost items.
    #[serde(default)]
    pub items: Vec<LostItem>,
    /// Attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
