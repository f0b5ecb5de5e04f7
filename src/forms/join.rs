// SPDX-License-Identifier: MPL-2.0
//! "Join Àkanní" application form.
//!
//! Conditional fields:
//! - degree `Other` requires a free-text degree, which replaces it in the submission
//! - studying `Yes` requires the current course
//! - studying `No` requires work experience in whole years

use super::{require, require_email, FieldErrors, ERR_NAME_REQUIRED};
use crate::content::{DEGREE_OPTIONS, OTHER_DEGREE};
use std::collections::BTreeSet;

pub const ERR_CONTACT_REQUIRED: &str = "form-error-contact-required";
pub const ERR_DEGREE_REQUIRED: &str = "form-error-degree-required";
pub const ERR_CUSTOM_DEGREE_REQUIRED: &str = "form-error-custom-degree-required";
pub const ERR_STUDYING_REQUIRED: &str = "form-error-studying-required";
pub const ERR_COURSE_REQUIRED: &str = "form-error-course-required";
pub const ERR_EXPERIENCE_REQUIRED: &str = "form-error-experience-required";
pub const ERR_EXPERIENCE_INVALID: &str = "form-error-experience-invalid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JoinField {
    Name,
    Email,
    Contact,
    Degree,
    CustomDegree,
    Studying,
    Course,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Studying {
    Yes,
    No,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    /// One of [`DEGREE_OPTIONS`].
    pub degree: Option<&'static str>,
    pub custom_degree: String,
    pub studying: Option<Studying>,
    pub course: String,
    pub experience: String,
    /// Selected service short names.
    pub domains: BTreeSet<&'static str>,
}

/// Where the applicant stands today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupation {
    Studying { course: String },
    Working { experience_years: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSubmission {
    pub name: String,
    pub email: String,
    pub contact: String,
    /// Listed degree, or the free text when `Other` was picked.
    pub degree: String,
    pub occupation: Occupation,
    pub domains: Vec<&'static str>,
}

impl JoinSubmission {
    #[must_use]
    pub fn summary(&self) -> String {
        let occupation = match &self.occupation {
            Occupation::Studying { course } => format!("studying={course}"),
            Occupation::Working { experience_years } => {
                format!("experience_years={experience_years}")
            }
        };
        format!(
            "name={} email={} degree={} {} domains=[{}]",
            self.name,
            super::redact_email(&self.email),
            self.degree,
            occupation,
            self.domains.join(", ")
        )
    }
}

impl JoinForm {
    pub fn toggle_domain(&mut self, domain: &'static str) {
        if !self.domains.remove(domain) {
            self.domains.insert(domain);
        }
    }

    #[must_use]
    pub fn needs_custom_degree(&self) -> bool {
        self.degree == Some(OTHER_DEGREE)
    }

    pub fn validate(&self) -> Result<JoinSubmission, FieldErrors<JoinField>> {
        let mut errors = FieldErrors::new();

        require(&mut errors, JoinField::Name, &self.name, ERR_NAME_REQUIRED);
        require_email(&mut errors, JoinField::Email, &self.email);
        require(
            &mut errors,
            JoinField::Contact,
            &self.contact,
            ERR_CONTACT_REQUIRED,
        );

        let degree = match self.degree {
            Some(degree) if DEGREE_OPTIONS.contains(&degree) => Some(degree),
            _ => {
                errors.insert(JoinField::Degree, ERR_DEGREE_REQUIRED);
                None
            }
        };
        let final_degree = match degree {
            Some(OTHER_DEGREE) => {
                require(
                    &mut errors,
                    JoinField::CustomDegree,
                    &self.custom_degree,
                    ERR_CUSTOM_DEGREE_REQUIRED,
                );
                self.custom_degree.trim().to_string()
            }
            Some(degree) => degree.to_string(),
            None => String::new(),
        };

        let occupation = match self.studying {
            None => {
                errors.insert(JoinField::Studying, ERR_STUDYING_REQUIRED);
                None
            }
            Some(Studying::Yes) => {
                require(&mut errors, JoinField::Course, &self.course, ERR_COURSE_REQUIRED);
                Some(Occupation::Studying {
                    course: self.course.trim().to_string(),
                })
            }
            Some(Studying::No) => match parse_years(&self.experience) {
                Ok(experience_years) => Some(Occupation::Working { experience_years }),
                Err(key) => {
                    errors.insert(JoinField::Experience, key);
                    None
                }
            },
        };

        match occupation {
            Some(occupation) if errors.is_empty() => Ok(JoinSubmission {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                contact: self.contact.trim().to_string(),
                degree: final_degree,
                occupation,
                domains: self.domains.iter().copied().collect(),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_years(raw: &str) -> Result<u32, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ERR_EXPERIENCE_REQUIRED);
    }
    raw.parse::<u32>().map_err(|_| ERR_EXPERIENCE_INVALID)
}
