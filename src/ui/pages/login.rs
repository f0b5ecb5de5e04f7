// SPDX-License-Identifier: MPL-2.0
//! Login page. There is no account backend; a valid form is only logged.

use super::{form_card, input, labeled, page_title, Event};
use crate::app::Route;
use crate::forms::{FieldErrors, LoginField, LoginForm};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element, Length};

pub const SUBMITTED_KEY: &str = "notification-login-sent";

#[derive(Debug, Clone)]
pub enum Message {
    Identifier(String),
    Password(String),
    Submit,
    GoToSignup,
}

#[derive(Debug, Default)]
pub struct State {
    form: LoginForm,
    errors: FieldErrors<LoginField>,
}

impl State {
    #[must_use]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors<LoginField> {
        &self.errors
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Identifier(value) => {
                self.form.identifier = value;
                self.errors.remove(&LoginField::Identifier);
                Event::None
            }
            Message::Password(value) => {
                self.form.password = value;
                self.errors.remove(&LoginField::Password);
                Event::None
            }
            Message::GoToSignup => Event::Navigate(Route::Signup),
            Message::Submit => match self.form.validate() {
                Ok(submission) => {
                    tracing::info!(summary = %submission.summary(), "login submitted");
                    self.form.password.clear();
                    self.errors.clear();
                    Event::Submitted(SUBMITTED_KEY)
                }
                Err(errors) => {
                    self.errors = errors;
                    Event::None
                }
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let identifier = labeled(
            i18n,
            "form-identifier-label",
            input(
                &i18n.tr("form-identifier-placeholder"),
                &self.form.identifier,
                Message::Identifier,
            ),
            self.errors.get(&LoginField::Identifier),
        );
        let password = labeled(
            i18n,
            "form-password-label",
            input("", &self.form.password, Message::Password)
                .secure(true)
                .on_submit(Message::Submit),
            self.errors.get(&LoginField::Password),
        );

        let submit = button(Text::new(i18n.tr("login-submit")).size(typography::BODY_LG))
            .on_press(Message::Submit)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::primary);

        let switch = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("login-no-account")).size(typography::BODY))
            .push(
                button(Text::new(i18n.tr("route-signup")).size(typography::BODY))
                    .on_press(Message::GoToSignup)
                    .padding(0)
                    .style(styles::button::ghost),
            );

        form_card(
            Column::new()
                .push(page_title(i18n.tr("login-title")))
                .push(identifier)
                .push(password)
                .push(submit)
                .push(switch),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_number_is_a_valid_identifier() {
        let mut state = State::default();
        state.update(Message::Identifier("9004138118".into()));
        state.update(Message::Password("pw".into()));
        assert_eq!(state.update(Message::Submit), Event::Submitted(SUBMITTED_KEY));
        assert!(state.form().password.is_empty());
        assert_eq!(state.form().identifier, "9004138118");
    }

    #[test]
    fn empty_submit_flags_both_fields() {
        let mut state = State::default();
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(state.errors().len(), 2);
        let _ = state.view(&I18n::default());
    }
}
