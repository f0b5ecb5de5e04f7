// SPDX-License-Identifier: MPL-2.0
//! Synchronous validation for the site's forms.
//!
//! Each form is plain data plus a pure `validate()` that yields either a
//! typed submission or a map of field to i18n error key. Nothing here
//! touches the network or disk: a valid submission is only logged and
//! acknowledged by the UI.

pub mod contact;
pub mod email;
pub mod join;
pub mod login;
pub mod signup;

use std::collections::BTreeMap;

pub use contact::{ContactField, ContactForm, ContactSubmission};
pub use join::{JoinField, JoinForm, JoinSubmission, Studying};
pub use login::{LoginField, LoginForm, LoginSubmission};
pub use signup::{SignupField, SignupForm, SignupSubmission};

/// Field → i18n key of the first problem found with it.
pub type FieldErrors<F> = BTreeMap<F, &'static str>;

pub(crate) const ERR_NAME_REQUIRED: &str = "form-error-name-required";
pub(crate) const ERR_EMAIL_REQUIRED: &str = "form-error-email-required";
pub(crate) const ERR_EMAIL_INVALID: &str = "form-error-email-invalid";
pub(crate) const ERR_PASSWORD_REQUIRED: &str = "form-error-password-required";

/// Records `key` for `field` when `value` is blank.
pub(crate) fn require<F: Ord>(errors: &mut FieldErrors<F>, field: F, value: &str, key: &'static str) {
    if value.trim().is_empty() {
        errors.entry(field).or_insert(key);
    }
}

/// Required + pattern check shared by every form with an email field.
pub(crate) fn require_email<F: Ord>(errors: &mut FieldErrors<F>, field: F, value: &str) {
    if value.trim().is_empty() {
        errors.entry(field).or_insert(ERR_EMAIL_REQUIRED);
    } else if !email::is_valid(value) {
        errors.entry(field).or_insert(ERR_EMAIL_INVALID);
    }
}

/// Masks the local part of an address for log lines: `j***@example.com`.
#[must_use]
pub fn redact_email(address: &str) -> String {
    let address = address.trim();
    match address.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}
