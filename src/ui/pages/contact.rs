// SPDX-License-Identifier: MPL-2.0
//! Contact page: studio details beside a message form.

use super::{input, labeled, page_title, Event};
use crate::content;
use crate::forms::{ContactField, ContactForm, FieldErrors};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub const SUBMITTED_KEY: &str = "notification-contact-sent";

#[derive(Debug, Clone)]
pub enum Message {
    Name(String),
    Email(String),
    Body(String),
    Submit,
}

#[derive(Debug, Default)]
pub struct State {
    form: ContactForm,
    errors: FieldErrors<ContactField>,
}

impl State {
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors<ContactField> {
        &self.errors
    }

    pub fn update(&mut self, message: Message) -> Event {
        let field = match message {
            Message::Name(value) => {
                self.form.name = value;
                ContactField::Name
            }
            Message::Email(value) => {
                self.form.email = value;
                ContactField::Email
            }
            Message::Body(value) => {
                self.form.message = value;
                ContactField::Message
            }
            Message::Submit => return self.submit(),
        };
        self.errors.remove(&field);
        Event::None
    }

    fn submit(&mut self) -> Event {
        match self.form.validate() {
            Ok(submission) => {
                tracing::info!(summary = %submission.summary(), "contact message submitted");
                self.form.reset();
                self.errors.clear();
                Event::Submitted(SUBMITTED_KEY)
            }
            Err(errors) => {
                self.errors = errors;
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let details = Column::new()
            .spacing(spacing::SM)
            .width(Length::FillPortion(1))
            .push(Text::new(i18n.tr("contact-details-title")).size(typography::TITLE_SM))
            .push(detail(i18n.tr("contact-address-label"), content::CONTACT_ADDRESS))
            .push(detail(i18n.tr("contact-phone-label"), content::CONTACT_PHONE))
            .push(detail(i18n.tr("contact-email-label"), content::CONTACT_EMAIL));

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::FillPortion(1))
            .push(labeled(
                i18n,
                "form-name-label",
                input(&i18n.tr("form-name-placeholder"), &self.form.name, Message::Name),
                self.errors.get(&ContactField::Name),
            ))
            .push(labeled(
                i18n,
                "form-email-label",
                input(&i18n.tr("form-email-placeholder"), &self.form.email, Message::Email),
                self.errors.get(&ContactField::Email),
            ))
            .push(labeled(
                i18n,
                "form-message-label",
                input(
                    &i18n.tr("form-message-placeholder"),
                    &self.form.message,
                    Message::Body,
                )
                .on_submit(Message::Submit),
                self.errors.get(&ContactField::Message),
            ))
            .push(
                button(Text::new(i18n.tr("contact-submit")).size(typography::BODY_LG))
                    .on_press(Message::Submit)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary),
            );

        let body = Column::new()
            .spacing(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(page_title(i18n.tr("contact-title")))
            .push(Row::new().spacing(spacing::XL).push(details).push(form));

        Container::new(body)
            .width(Length::Fill)
            .padding([spacing::XXL, spacing::LG])
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

fn detail<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .style(styles::text::secondary),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::ERR_MESSAGE_REQUIRED;

    #[test]
    fn success_clears_the_form() {
        let mut state = State::default();
        state.update(Message::Name("Bo".into()));
        state.update(Message::Email("bo@x.io".into()));
        state.update(Message::Body("Hello".into()));
        assert_eq!(state.update(Message::Submit), Event::Submitted(SUBMITTED_KEY));
        assert_eq!(state.form(), &ContactForm::default());
    }

    #[test]
    fn blank_message_is_required() {
        let mut state = State::default();
        state.update(Message::Name("Bo".into()));
        state.update(Message::Email("bo@x.io".into()));
        state.update(Message::Body("   ".into()));
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(
            state.errors().get(&ContactField::Message),
            Some(&ERR_MESSAGE_REQUIRED)
        );
        assert_eq!(state.form().name, "Bo");
        let _ = state.view(&I18n::default());
    }
}
