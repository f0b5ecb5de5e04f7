// SPDX-License-Identifier: MPL-2.0
//! Login form. Accepts an email address or a mobile number as identifier.

use super::{require, FieldErrors, ERR_PASSWORD_REQUIRED};

pub const ERR_IDENTIFIER_REQUIRED: &str = "form-error-identifier-required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Identifier,
    Password,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub identifier: String,
    password: String,
}

impl LoginSubmission {
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn is_email(&self) -> bool {
        super::email::is_valid(&self.identifier)
    }

    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_email() {
            format!("identifier={}", super::redact_email(&self.identifier))
        } else {
            let digits = self.identifier.chars().count();
            format!("identifier=<mobile, {digits} chars>")
        }
    }
}

impl std::fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginSubmission, FieldErrors<LoginField>> {
        let mut errors = FieldErrors::new();
        require(
            &mut errors,
            LoginField::Identifier,
            &self.identifier,
            ERR_IDENTIFIER_REQUIRED,
        );
        if self.password.is_empty() {
            errors.insert(LoginField::Password, ERR_PASSWORD_REQUIRED);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginSubmission {
            identifier: self.identifier.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_are_required() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors[&LoginField::Identifier], ERR_IDENTIFIER_REQUIRED);
        assert_eq!(errors[&LoginField::Password], ERR_PASSWORD_REQUIRED);
    }

    #[test]
    fn mobile_number_is_accepted_as_identifier() {
        let form = LoginForm {
            identifier: "9004138118".into(),
            password: "secret".into(),
        };
        let submission = form.validate().expect("valid");
        assert!(!submission.is_email());
        assert_eq!(submission.summary(), "identifier=<mobile, 10 chars>");
    }

    #[test]
    fn summary_redacts_email_and_omits_password() {
        let form = LoginForm {
            identifier: "jane@example.com".into(),
            password: "secret".into(),
        };
        let submission = form.validate().expect("valid");
        assert_eq!(submission.summary(), "identifier=j***@example.com");
        assert!(!format!("{submission:?}").contains("secret"));
    }
}
