// SPDX-License-Identifier: MPL-2.0
//! Account signup form.

use super::{require, require_email, FieldErrors, ERR_NAME_REQUIRED, ERR_PASSWORD_REQUIRED};

pub const ERR_CONFIRM_REQUIRED: &str = "form-error-confirm-required";
pub const ERR_PASSWORD_MISMATCH: &str = "form-error-password-mismatch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// A signup that passed validation. The password never leaves this struct
/// through `Debug` or [`summary`](Self::summary).
#[derive(Clone, PartialEq, Eq)]
pub struct SignupSubmission {
    pub name: String,
    pub email: String,
    password: String,
}

impl SignupSubmission {
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Log-safe one-liner.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "name={} email={}",
            self.name,
            super::redact_email(&self.email)
        )
    }
}

impl std::fmt::Debug for SignupSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupSubmission")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupSubmission, FieldErrors<SignupField>> {
        let mut errors = FieldErrors::new();

        require(&mut errors, SignupField::Name, &self.name, ERR_NAME_REQUIRED);
        require_email(&mut errors, SignupField::Email, &self.email);
        if self.password.is_empty() {
            errors.insert(SignupField::Password, ERR_PASSWORD_REQUIRED);
        }
        if self.confirm_password.is_empty() {
            errors.insert(SignupField::ConfirmPassword, ERR_CONFIRM_REQUIRED);
        } else if !self.password.is_empty() && self.password != self.confirm_password {
            errors.insert(SignupField::ConfirmPassword, ERR_PASSWORD_MISMATCH);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        }
    }

    #[test]
    fn valid_form_yields_submission() {
        let submission = filled().validate().expect("valid");
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.password(), "hunter22");
    }

    #[test]
    fn empty_form_flags_every_field() {
        let errors = SignupForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&SignupField::Email], "form-error-email-required");
        assert_eq!(errors[&SignupField::ConfirmPassword], ERR_CONFIRM_REQUIRED);
    }

    #[test]
    fn mismatched_passwords_are_reported_on_confirm() {
        let form = SignupForm {
            confirm_password: "hunter23".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&SignupField::ConfirmPassword], ERR_PASSWORD_MISMATCH);
    }

    #[test]
    fn blank_password_is_only_reported_as_missing() {
        let form = SignupForm {
            password: String::new(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(&SignupField::Password), Some(&ERR_PASSWORD_REQUIRED));
        assert_eq!(errors.get(&SignupField::ConfirmPassword), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_is_invalid_not_missing() {
        let form = SignupForm {
            email: "jane.example.com".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[&SignupField::Email], "form-error-email-invalid");
    }

    #[test]
    fn password_never_shows_in_debug_or_summary() {
        let submission = filled().validate().expect("valid");
        assert!(!format!("{submission:?}").contains("hunter22"));
        assert!(!submission.summary().contains("hunter22"));
        assert!(!format!("{:?}", filled()).contains("hunter22"));
    }
}
