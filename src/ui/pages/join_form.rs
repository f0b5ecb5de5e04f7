// SPDX-License-Identifier: MPL-2.0
//! "Join Àkanní" application page.
//!
//! The degree picker unlocks a free-text degree for `Other`, and the
//! studying radio switches between the course and experience fields.

use super::{form_card, input, labeled, page_title, Event};
use crate::content;
use crate::forms::{FieldErrors, JoinField, JoinForm, Studying};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, pick_list, radio, Column, Row, Text};
use iced::{Element, Length};

pub const SUBMITTED_KEY: &str = "notification-join-sent";

#[derive(Debug, Clone)]
pub enum Message {
    Name(String),
    Email(String),
    Contact(String),
    Degree(&'static str),
    CustomDegree(String),
    Studying(Studying),
    Course(String),
    Experience(String),
    ToggleDomain(&'static str),
    Submit,
}

#[derive(Debug, Default)]
pub struct State {
    form: JoinForm,
    errors: FieldErrors<JoinField>,
}

impl State {
    #[must_use]
    pub fn form(&self) -> &JoinForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors<JoinField> {
        &self.errors
    }

    pub fn update(&mut self, message: Message) -> Event {
        let form = &mut self.form;
        let touched = match message {
            Message::Name(value) => {
                form.name = value;
                JoinField::Name
            }
            Message::Email(value) => {
                form.email = value;
                JoinField::Email
            }
            Message::Contact(value) => {
                form.contact = value;
                JoinField::Contact
            }
            Message::Degree(value) => {
                form.degree = Some(value);
                if !form.needs_custom_degree() {
                    self.errors.remove(&JoinField::CustomDegree);
                }
                JoinField::Degree
            }
            Message::CustomDegree(value) => {
                form.custom_degree = value;
                JoinField::CustomDegree
            }
            Message::Studying(value) => {
                form.studying = Some(value);
                self.errors.remove(&JoinField::Course);
                self.errors.remove(&JoinField::Experience);
                JoinField::Studying
            }
            Message::Course(value) => {
                form.course = value;
                JoinField::Course
            }
            Message::Experience(value) => {
                form.experience = value;
                JoinField::Experience
            }
            Message::ToggleDomain(domain) => {
                form.toggle_domain(domain);
                return Event::None;
            }
            Message::Submit => return self.submit(),
        };
        self.errors.remove(&touched);
        Event::None
    }

    fn submit(&mut self) -> Event {
        match self.form.validate() {
            Ok(submission) => {
                tracing::info!(summary = %submission.summary(), "join application submitted");
                *self = Self::default();
                Event::Submitted(SUBMITTED_KEY)
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "join application rejected");
                self.errors = errors;
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let form = &self.form;
        let errors = &self.errors;

        let mut column = Column::new()
            .push(page_title(i18n.tr("join-form-title")))
            .push(labeled(
                i18n,
                "form-name-label",
                input(&i18n.tr("form-name-placeholder"), &form.name, Message::Name),
                errors.get(&JoinField::Name),
            ))
            .push(labeled(
                i18n,
                "form-email-label",
                input(&i18n.tr("form-email-placeholder"), &form.email, Message::Email),
                errors.get(&JoinField::Email),
            ))
            .push(labeled(
                i18n,
                "form-contact-label",
                input(&i18n.tr("form-contact-placeholder"), &form.contact, Message::Contact),
                errors.get(&JoinField::Contact),
            ))
            .push(labeled(
                i18n,
                "form-degree-label",
                pick_list(content::DEGREE_OPTIONS, form.degree, Message::Degree)
                    .placeholder(i18n.tr("form-degree-placeholder"))
                    .padding(spacing::XS)
                    .width(Length::Fill),
                errors.get(&JoinField::Degree),
            ));

        if form.needs_custom_degree() {
            column = column.push(labeled(
                i18n,
                "form-custom-degree-label",
                input("", &form.custom_degree, Message::CustomDegree),
                errors.get(&JoinField::CustomDegree),
            ));
        }

        let studying = Row::new()
            .spacing(spacing::LG)
            .push(radio(
                i18n.tr("form-answer-yes"),
                Studying::Yes,
                form.studying,
                Message::Studying,
            ))
            .push(radio(
                i18n.tr("form-answer-no"),
                Studying::No,
                form.studying,
                Message::Studying,
            ));
        column = column.push(labeled(
            i18n,
            "form-studying-label",
            studying,
            errors.get(&JoinField::Studying),
        ));

        match form.studying {
            Some(Studying::Yes) => {
                column = column.push(labeled(
                    i18n,
                    "form-course-label",
                    input("", &form.course, Message::Course),
                    errors.get(&JoinField::Course),
                ));
            }
            Some(Studying::No) => {
                column = column.push(labeled(
                    i18n,
                    "form-experience-label",
                    input("0", &form.experience, Message::Experience),
                    errors.get(&JoinField::Experience),
                ));
            }
            None => {}
        }

        let domains = content::domain_names().fold(
            Column::new().spacing(spacing::XXS),
            |col, domain| {
                col.push(
                    checkbox(form.domains.contains(domain))
                        .label(domain)
                        .on_toggle(move |_| Message::ToggleDomain(domain))
                        .size(typography::BODY_LG),
                )
            },
        );
        column = column.push(labeled(i18n, "form-domains-label", domains, None));

        column = column.push(
            button(Text::new(i18n.tr("join-form-submit")).size(typography::BODY_LG))
                .on_press(Message::Submit)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::primary),
        );

        form_card(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::join::{ERR_CUSTOM_DEGREE_REQUIRED, ERR_EXPERIENCE_INVALID};

    fn basics(state: &mut State) {
        state.update(Message::Name("Ravi".into()));
        state.update(Message::Email("ravi@example.com".into()));
        state.update(Message::Contact("98765".into()));
    }

    #[test]
    fn other_degree_needs_free_text() {
        let mut state = State::default();
        basics(&mut state);
        state.update(Message::Degree(content::OTHER_DEGREE));
        state.update(Message::Studying(Studying::Yes));
        state.update(Message::Course("Design".into()));
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(
            state.errors().get(&JoinField::CustomDegree),
            Some(&ERR_CUSTOM_DEGREE_REQUIRED)
        );

        state.update(Message::Degree("MBA"));
        assert!(!state.errors().contains_key(&JoinField::CustomDegree));
    }

    #[test]
    fn switching_studying_clears_stale_branch_errors() {
        let mut state = State::default();
        basics(&mut state);
        state.update(Message::Degree("MBA"));
        state.update(Message::Studying(Studying::No));
        state.update(Message::Experience("two".into()));
        state.update(Message::Submit);
        assert_eq!(
            state.errors().get(&JoinField::Experience),
            Some(&ERR_EXPERIENCE_INVALID)
        );
        state.update(Message::Studying(Studying::Yes));
        assert!(!state.errors().contains_key(&JoinField::Experience));
    }

    #[test]
    fn valid_application_resets_the_page() {
        let mut state = State::default();
        basics(&mut state);
        state.update(Message::Degree("B.Tech"));
        state.update(Message::Studying(Studying::No));
        state.update(Message::Experience("3".into()));
        state.update(Message::ToggleDomain("Digital Marketing"));
        assert_eq!(state.update(Message::Submit), Event::Submitted(SUBMITTED_KEY));
        assert_eq!(state.form(), &JoinForm::default());
    }

    #[test]
    fn view_shows_conditional_fields() {
        let i18n = I18n::default();
        let mut state = State::default();
        state.update(Message::Degree(content::OTHER_DEGREE));
        state.update(Message::Studying(Studying::No));
        let _ = state.view(&i18n);
    }
}
