//! Role resolution at account creation.

use lostprop_entity::user::UserRole;

/// The role a new account gets: admin for the configured administrator
/// address, user for everyone else. Comparison ignores case and
/// surrounding whitespace.
pub fn resolve_role(email: &str, admin_email: &str) -> UserRole {
    if email.trim().eq_ignore_ascii_case(admin_email.trim()) {
        UserRole::Admin
    } else {
        UserRole::User
    }
}

/// Lowercase, trimmed form used for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Loose shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
