// SPDX-License-Identifier: MPL-2.0
//! The sections of the portfolio page.
//!
//! Each section renders at the height [`PageLayout`](crate::ui::layout::PageLayout)
//! assigned to it. Sections below the hero fade in once: until their reveal
//! finishes they are covered by a veil and pushed down by up to
//! [`REVEAL_OFFSET`] pixels.

pub mod about;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod skills;
pub mod timeline;

use crate::config::REVEAL_OFFSET;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Space, Stack, Text};
use iced::{alignment, Element, Length, Padding};

/// Shared framing for a section below the hero.
pub struct SectionFrame<'a, Message> {
    pub title: String,
    pub subtitle: String,
    pub body: Element<'a, Message>,
    pub height: f32,
    pub content_width: f32,
    /// Alternate background, used on every other section.
    pub alternate: bool,
    /// Reveal progress in `[0, 1]`.
    pub reveal: f32,
}

impl<'a, Message: 'a> SectionFrame<'a, Message> {
    pub fn view(self) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(self.title).size(typography::TITLE_LG))
            .push(
                Text::new(self.subtitle)
                    .size(typography::BODY_LG)
                    .style(styles::text::muted),
            );

        let column = Column::new()
            .width(Length::Fixed(self.content_width))
            .push(
                Container::new(header)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::SECTION_HEADER_HEIGHT))
                    .padding(Padding::ZERO.top(spacing::XXXL))
                    .align_x(alignment::Horizontal::Center),
            )
            .push(self.body);

        let shift = reveal_shift(self.reveal);
        let style = if self.alternate {
            styles::container::section_alt
        } else {
            styles::container::page
        };

        let section = Container::new(column)
            .width(Length::Fill)
            .height(Length::Fixed(self.height))
            .padding(Padding::ZERO.top(shift))
            .align_x(alignment::Horizontal::Center)
            .clip(true)
            .style(style);

        if self.reveal >= 1.0 {
            return section.into();
        }

        Stack::new()
            .push(section)
            .push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(self.height))
                    .style(styles::container::reveal_veil(self.reveal)),
            )
            .into()
    }
}

/// Downward offset of a section at reveal progress `progress`.
#[must_use]
pub fn reveal_shift(progress: f32) -> f32 {
    REVEAL_OFFSET * (1.0 - progress.clamp(0.0, 1.0))
}
