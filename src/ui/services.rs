// SPDX-License-Identifier: MPL-2.0
//! Services showcase: a horizontal track of cards with scroll buttons.
//!
//! Clicking a card expands its bullet points; at most one card is open.
//! The arrow buttons follow the track's scroll position, which the
//! scrollable reports back through [`Message::Scrolled`]. Before the first
//! report the metrics are estimated from the window width.

use crate::app::config::{SERVICE_CARD_WIDTH, SERVICE_SCROLL_CARDS};
use crate::content::{self, Service};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{button, operation, Column, Container, Id, Row, Scrollable, Text};
use iced::{alignment, Element, Length, Task};

const TRACK_ID: &str = "services-track";

/// Horizontal scroll geometry of the track, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport: f32,
    pub content: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn can_scroll_left(self) -> bool {
        self.offset > 0.0
    }

    /// One pixel of slack absorbs fractional layout widths.
    #[must_use]
    pub fn can_scroll_right(self) -> bool {
        self.offset + self.viewport < self.content - 1.0
    }

    /// Unscrolled track whose viewport is the window minus page padding.
    #[must_use]
    pub fn estimate(window_width: f32) -> Self {
        let cards = content::SERVICES.len() as f32;
        Self {
            offset: 0.0,
            viewport: (window_width - 2.0 * spacing::LG).max(0.0),
            content: cards * SERVICE_CARD_WIDTH + (cards - 1.0) * spacing::MD,
        }
    }
}

/// Distance one arrow press scrolls.
#[must_use]
pub fn scroll_step() -> f32 {
    SERVICE_CARD_WIDTH * SERVICE_SCROLL_CARDS
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Option<usize>,
    measured: Option<ScrollMetrics>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleCard(usize),
    ScrollLeft,
    ScrollRight,
    Scrolled(ScrollMetrics),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window_width: f32,
}

impl State {
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn metrics(&self, window_width: f32) -> ScrollMetrics {
        self.measured
            .unwrap_or_else(|| ScrollMetrics::estimate(window_width))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleCard(index) => {
                self.selected = if self.selected == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Task::none()
            }
            Message::ScrollLeft => operation::scroll_by(
                Id::new(TRACK_ID),
                AbsoluteOffset {
                    x: -scroll_step(),
                    y: 0.0,
                },
            ),
            Message::ScrollRight => operation::scroll_by(
                Id::new(TRACK_ID),
                AbsoluteOffset {
                    x: scroll_step(),
                    y: 0.0,
                },
            ),
            Message::Scrolled(metrics) => {
                self.measured = Some(metrics);
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let metrics = self.metrics(ctx.window_width);

        let heading = Text::new(ctx.i18n.tr("services-title")).size(typography::TITLE_LG);

        let cards = content::SERVICES.iter().enumerate().fold(
            Row::new().spacing(spacing::MD).align_y(alignment::Vertical::Top),
            |row, (index, service)| row.push(card(service, index, self.selected == Some(index))),
        );

        let track = Scrollable::new(Container::new(cards).padding([spacing::XS, 0.0]))
            .id(Id::new(TRACK_ID))
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::default(),
            ))
            .width(Length::Fill)
            .on_scroll(|viewport| {
                Message::Scrolled(ScrollMetrics {
                    offset: viewport.absolute_offset().x,
                    viewport: viewport.bounds().width,
                    content: viewport.content_bounds().width,
                })
            });

        let left = arrow("‹", metrics.can_scroll_left().then_some(Message::ScrollLeft));
        let right = arrow("›", metrics.can_scroll_right().then_some(Message::ScrollRight));

        let controls = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(left)
            .push(track)
            .push(right);

        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .padding([spacing::XXL, spacing::LG])
            .push(heading)
            .push(controls)
            .into()
    }
}

fn arrow<'a>(glyph: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    button(Text::new(glyph).size(typography::TITLE_LG))
        .on_press_maybe(on_press)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary)
        .into()
}

fn card<'a>(service: &'a Service, index: usize, expanded: bool) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(service.icon).size(typography::DISPLAY))
        .push(Text::new(service.title).size(typography::TITLE_SM));

    if expanded {
        body = service.points.iter().fold(body, |col, point| {
            col.push(Text::new(format!("• {point}")).size(typography::BODY))
        });
    }

    let height = if expanded {
        Length::Shrink
    } else {
        Length::Fixed(sizing::SERVICE_CARD_HEIGHT)
    };

    button(body)
        .on_press(Message::ToggleCard(index))
        .width(Length::Fixed(SERVICE_CARD_WIDTH))
        .height(height)
        .padding(spacing::MD)
        .style(styles::button::card(expanded))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_follow_scroll_position() {
        let start = ScrollMetrics {
            offset: 0.0,
            viewport: 600.0,
            content: 1600.0,
        };
        assert!(!start.can_scroll_left());
        assert!(start.can_scroll_right());

        let end = ScrollMetrics {
            offset: 1000.0,
            ..start
        };
        assert!(end.can_scroll_left());
        assert!(!end.can_scroll_right());
    }

    #[test]
    fn sub_pixel_remainder_counts_as_end() {
        let metrics = ScrollMetrics {
            offset: 999.5,
            viewport: 600.0,
            content: 1600.0,
        };
        assert!(!metrics.can_scroll_right());
    }

    #[test]
    fn scroll_step_is_one_and_a_half_cards() {
        assert!((scroll_step() - 450.0).abs() < f32::EPSILON);
    }

    #[test]
    fn wide_window_estimate_needs_no_arrows() {
        let metrics = ScrollMetrics::estimate(4000.0);
        assert!(!metrics.can_scroll_left());
        assert!(!metrics.can_scroll_right());
        assert!(ScrollMetrics::estimate(800.0).can_scroll_right());
    }

    #[test]
    fn measured_metrics_replace_the_estimate() {
        let mut state = State::default();
        let measured = ScrollMetrics {
            offset: 120.0,
            viewport: 500.0,
            content: 1600.0,
        };
        let _ = state.update(Message::Scrolled(measured));
        assert_eq!(state.metrics(4000.0), measured);
    }

    #[test]
    fn one_card_open_at_a_time() {
        let mut state = State::default();
        let _ = state.update(Message::ToggleCard(1));
        assert_eq!(state.selected(), Some(1));
        let _ = state.update(Message::ToggleCard(3));
        assert_eq!(state.selected(), Some(3));
        let _ = state.update(Message::ToggleCard(3));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let mut state = State::default();
        let _ = state.view(ViewContext {
            i18n: &i18n,
            window_width: 900.0,
        });
        let _ = state.update(Message::ToggleCard(0));
        let _ = state.view(ViewContext {
            i18n: &i18n,
            window_width: 900.0,
        });
    }
}
