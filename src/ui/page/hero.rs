// SPDX-License-Identifier: MPL-2.0
//! Hero section: greeting, name, typewriter tagline and two calls to action.

use crate::i18n::fluent::I18n;
use crate::ui::cursor::hover_zone;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::sections::SectionId;
use crate::ui::state::typewriter::Typewriter;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Caret drawn after the typed text.
const CARET: &str = "|";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub name: &'a str,
    pub typewriter: Option<&'a Typewriter>,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(SectionId),
    Hover(bool),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tagline = ctx.typewriter.map_or("", Typewriter::displayed);

    let typed = Row::new()
        .push(
            Text::new(tagline)
                .size(typography::DISPLAY_SM)
                .style(styles::text::brand),
        )
        .push(
            Text::new(CARET)
                .size(typography::DISPLAY_SM)
                .style(styles::text::faint),
        );

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(call_to_action(
            ctx.i18n.tr("hero-cta-work"),
            SectionId::Portfolio,
            styles::button::primary,
        ))
        .push(call_to_action(
            ctx.i18n.tr("hero-cta-contact"),
            SectionId::Contact,
            styles::button::outline,
        ));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("hero-greeting"))
                .size(typography::TITLE_SM)
                .style(styles::text::muted),
        )
        .push(Text::new(ctx.name).size(typography::DISPLAY))
        .push(typed)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::page)
        .into()
}

fn call_to_action<'a>(
    label: String,
    target: SectionId,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    hover_zone(
        button(Text::new(label).size(typography::BODY_LG))
            .on_press(Message::Navigate(target))
            .padding([spacing::SM, spacing::LG])
            .style(style),
        Message::Hover,
    )
}
