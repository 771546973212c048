//! # lostprop-entity
//!
//! Domain entity models for the lost-property portal. Every struct in this
//! crate represents a database table row or a domain value object. Table
//! rows additionally derive `sqlx::FromRow`.
//!
//! The pure rules of the domain live next to the data they govern:
//! the report status workflow, attachment limits, the report search
//! predicate, and the banner time window.

pub mod banner;
pub mod notification;
pub mod report;
pub mod user;
