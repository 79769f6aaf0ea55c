// SPDX-License-Identifier: MPL-2.0
//! About section: biography, contact details and the counting stats row.

use super::SectionFrame;
use crate::content::{Owner, Stat};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::counter::CountUp;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// The stat counters. They all start together the first time the stats
/// row becomes visible.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    counters: Vec<CountUp>,
}

impl Stats {
    #[must_use]
    pub fn new(stats: &[Stat]) -> Self {
        Self {
            counters: stats.iter().map(|stat| CountUp::new(stat.value)).collect(),
        }
    }

    /// Starts every counter. Returns `false` when they had already started.
    pub fn start(&mut self) -> bool {
        self.counters
            .iter_mut()
            .fold(false, |started, counter| counter.start() || started)
    }

    pub fn tick(&mut self) {
        for counter in &mut self.counters {
            counter.tick();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.counters.iter().any(CountUp::is_running)
    }

    #[must_use]
    pub fn counters(&self) -> &[CountUp] {
        &self.counters
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub owner: &'a Owner,
    pub stats: &'a [Stat],
    pub counters: &'a Stats,
    pub height: f32,
    pub content_width: f32,
    pub reveal: f32,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut details = Row::new().spacing(spacing::XL);
    if let Some(email) = &ctx.owner.email {
        details = details.push(detail(ctx.i18n.tr("about-email"), email));
    }
    if let Some(location) = &ctx.owner.location {
        details = details.push(detail(ctx.i18n.tr("about-location"), location));
    }

    let bio = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(
                Text::new(ctx.owner.bio.as_str())
                    .size(typography::BODY_LG)
                    .style(styles::text::muted),
            )
            .push(details),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::ABOUT_BODY_HEIGHT));

    let stats = ctx.stats.iter().zip(ctx.counters.counters()).fold(
        Row::new().spacing(spacing::LG),
        |row, (stat, counter)| {
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .align_x(alignment::Horizontal::Center)
                        .push(
                            Text::new(counter.label())
                                .size(typography::TITLE_LG)
                                .style(styles::text::brand),
                        )
                        .push(
                            Text::new(stat.label.as_str())
                                .size(typography::BODY_SM)
                                .style(styles::text::muted),
                        ),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .style(styles::container::panel),
            )
        },
    );

    let body = Column::new().push(bio).push(
        Container::new(stats)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::STATS_ROW_HEIGHT)),
    );

    SectionFrame {
        title: ctx.i18n.tr("about-title"),
        subtitle: ctx.i18n.tr("about-subtitle"),
        body: body.into(),
        height: ctx.height,
        content_width: ctx.content_width,
        alternate: true,
        reveal: ctx.reveal,
    }
    .view()
}

fn detail<'a, Message: 'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .style(styles::text::faint),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}
