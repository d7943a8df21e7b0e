//! User field normalization

/// Normalize an email for storage and comparison
///
/// Emails are compared case-insensitively: surrounding whitespace is
/// dropped and the whole address is lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
