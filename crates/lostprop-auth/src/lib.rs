//! # lostprop-auth
//!
//! Authentication and authorization for the lost-property portal.
//!
//! ## Modules
//!
//! - `jwt` — session token issuing and verification
//! - `password` — Argon2id hashing and the minimum-length policy
//! - `rbac` — role resolution at registration and admin/owner checks
//! - `failure` — provider-style failure codes and their Indonesian messages

pub mod failure;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use failure::{AuthFailure, AuthFlow};
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{RbacEnforcer, resolve_role};
pub use rbac::role::{is_valid_email, normalize_email};
