// SPDX-License-Identifier: MPL-2.0
//! Sign-up page.

use super::{form_card, input, labeled, page_title, Event};
use crate::app::Route;
use crate::forms::{FieldErrors, SignupField, SignupForm};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element, Length};

pub const SUBMITTED_KEY: &str = "notification-signup-sent";

#[derive(Debug, Clone)]
pub enum Message {
    Name(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    Submit,
    GoToLogin,
}

#[derive(Debug, Default)]
pub struct State {
    form: SignupForm,
    errors: FieldErrors<SignupField>,
}

impl State {
    #[must_use]
    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors<SignupField> {
        &self.errors
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Name(value) => self.edit(SignupField::Name, |f| f.name = value),
            Message::Email(value) => self.edit(SignupField::Email, |f| f.email = value),
            Message::Password(value) => self.edit(SignupField::Password, |f| f.password = value),
            Message::ConfirmPassword(value) => {
                self.edit(SignupField::ConfirmPassword, |f| f.confirm_password = value)
            }
            Message::GoToLogin => Event::Navigate(Route::Login),
            Message::Submit => match self.form.validate() {
                Ok(submission) => {
                    tracing::info!(summary = %submission.summary(), "signup submitted");
                    *self = Self::default();
                    Event::Submitted(SUBMITTED_KEY)
                }
                Err(errors) => {
                    tracing::debug!(fields = errors.len(), "signup rejected");
                    self.errors = errors;
                    Event::None
                }
            },
        }
    }

    fn edit(&mut self, field: SignupField, apply: impl FnOnce(&mut SignupForm)) -> Event {
        apply(&mut self.form);
        self.errors.remove(&field);
        Event::None
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let form = &self.form;
        let errors = &self.errors;

        let name = labeled(
            i18n,
            "form-name-label",
            input(&i18n.tr("form-name-placeholder"), &form.name, Message::Name),
            errors.get(&SignupField::Name),
        );
        let email = labeled(
            i18n,
            "form-email-label",
            input(&i18n.tr("form-email-placeholder"), &form.email, Message::Email),
            errors.get(&SignupField::Email),
        );
        let password = labeled(
            i18n,
            "form-password-label",
            input("", &form.password, Message::Password).secure(true),
            errors.get(&SignupField::Password),
        );
        let confirm = labeled(
            i18n,
            "form-confirm-password-label",
            input("", &form.confirm_password, Message::ConfirmPassword)
                .secure(true)
                .on_submit(Message::Submit),
            errors.get(&SignupField::ConfirmPassword),
        );

        let submit = button(Text::new(i18n.tr("signup-submit")).size(typography::BODY_LG))
            .on_press(Message::Submit)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::primary);

        let switch = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("signup-have-account")).size(typography::BODY))
            .push(
                button(Text::new(i18n.tr("route-login")).size(typography::BODY))
                    .on_press(Message::GoToLogin)
                    .padding(0)
                    .style(styles::button::ghost),
            );

        form_card(
            Column::new()
                .push(page_title(i18n.tr("signup-title")))
                .push(name)
                .push(email)
                .push(password)
                .push(confirm)
                .push(submit)
                .push(switch),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::signup::ERR_PASSWORD_MISMATCH;

    fn filled() -> State {
        let mut state = State::default();
        state.update(Message::Name("Ada".into()));
        state.update(Message::Email("ada@example.com".into()));
        state.update(Message::Password("secret".into()));
        state.update(Message::ConfirmPassword("secret".into()));
        state
    }

    #[test]
    fn valid_submission_resets_and_acknowledges() {
        let mut state = filled();
        assert_eq!(state.update(Message::Submit), Event::Submitted(SUBMITTED_KEY));
        assert_eq!(state.form(), &SignupForm::default());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn mismatch_is_reported_and_form_kept() {
        let mut state = filled();
        state.update(Message::ConfirmPassword("other".into()));
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(
            state.errors().get(&SignupField::ConfirmPassword),
            Some(&ERR_PASSWORD_MISMATCH)
        );
        assert_eq!(state.form().name, "Ada");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = State::default();
        state.update(Message::Submit);
        assert!(state.errors().contains_key(&SignupField::Name));
        state.update(Message::Name("A".into()));
        assert!(!state.errors().contains_key(&SignupField::Name));
        assert!(state.errors().contains_key(&SignupField::Email));
    }

    #[test]
    fn login_link_navigates() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::GoToLogin),
            Event::Navigate(Route::Login)
        );
        let _ = state.view(&I18n::default());
    }
}
