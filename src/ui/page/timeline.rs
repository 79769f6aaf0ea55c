// SPDX-License-Identifier: MPL-2.0
//! Experience section: career entries, newest first as listed in the
//! content file.

use super::SectionFrame;
use crate::content::TimelineEntry;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

/// Width of the period column.
const PERIOD_WIDTH: f32 = 140.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [TimelineEntry],
    pub height: f32,
    pub content_width: f32,
    pub reveal: f32,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let entries = ctx.entries.iter().fold(Column::new(), |column, entry| {
        column.push(
            Container::new(entry_view(entry))
                .height(Length::Fixed(sizing::TIMELINE_ENTRY_HEIGHT))
                .padding([spacing::XS, 0.0]),
        )
    });

    SectionFrame {
        title: ctx.i18n.tr("experience-title"),
        subtitle: ctx.i18n.tr("experience-subtitle"),
        body: entries.into(),
        height: ctx.height,
        content_width: ctx.content_width,
        alternate: false,
        reveal: ctx.reveal,
    }
    .view()
}

fn entry_view<'a, Message: 'a>(entry: &'a TimelineEntry) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.role.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(entry.company.as_str())
                .size(typography::BODY)
                .style(styles::text::brand),
        )
        .push(
            Text::new(entry.description.as_str())
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );

    Container::new(
        Row::new()
            .spacing(spacing::LG)
            .push(
                Text::new(entry.period.as_str())
                    .size(typography::CAPTION)
                    .style(styles::text::faint)
                    .width(Length::Fixed(PERIOD_WIDTH)),
            )
            .push(details),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}
