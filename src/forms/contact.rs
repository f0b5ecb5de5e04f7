// SPDX-License-Identifier: MPL-2.0
//! Contact form.

use super::{require, require_email, FieldErrors, ERR_NAME_REQUIRED};

pub const ERR_MESSAGE_REQUIRED: &str = "form-error-message-required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "name={} email={} message_chars={}",
            self.name,
            super::redact_email(&self.email),
            self.message.chars().count()
        )
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors<ContactField>> {
        let mut errors = FieldErrors::new();
        require(&mut errors, ContactField::Name, &self.name, ERR_NAME_REQUIRED);
        require_email(&mut errors, ContactField::Email, &self.email);
        require(
            &mut errors,
            ContactField::Message,
            &self.message,
            ERR_MESSAGE_REQUIRED,
        );

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Clears every field after a successful send.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
