//! Submit-time validation for the profile setup step
//!
//! Three independent checks (name, username, email), all evaluated on every
//! submit attempt. The result replaces the previous error record wholesale;
//! errors are never merged field by field.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ProfileDraft;

/// `local@domain.tld`: at least one non-whitespace, non-`@` character before
/// the `@`, after it, and after a `.` in the domain part.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Field-level error messages for the profile form.
///
/// Exactly three fields can carry an error; the empty string means the
/// field is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl ValidationErrors {
    /// True iff no field has an error message.
    pub fn is_clean(&self) -> bool {
        self.name.is_empty() && self.username.is_empty() && self.email.is_empty()
    }
}

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate the draft for submission. All three checks run unconditionally.
pub fn validate(draft: &ProfileDraft) -> ValidationErrors {
    ValidationErrors {
        name: if draft.name.is_empty() {
            "Name is required".to_string()
        } else {
            String::new()
        },
        username: if draft.username.is_empty() {
            "Username is required".to_string()
        } else {
            String::new()
        },
        email: if draft.email.is_empty() {
            "Email is required".to_string()
        } else if !is_valid_email(&draft.email) {
            "Please enter a valid email address".to_string()
        } else {
            String::new()
        },
    }
}
