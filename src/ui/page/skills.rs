// SPDX-License-Identifier: MPL-2.0
//! Skills section: one labelled progress bar per skill.

use super::SectionFrame;
use crate::config::{SKILL_BAR_DELAY_MS, SKILL_BAR_DURATION_MS};
use crate::content::Skill;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::transition::Transition;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::{Duration, Instant};

/// Resolution of the bar fill, in portions of the track.
const FILL_PORTIONS: f32 = 1000.0;

/// Fill animation shared by every bar. Starts once, a short delay after
/// the list becomes visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillBars {
    transition: Option<Transition>,
}

impl SkillBars {
    /// Starts the fill. Returns `false` when it had already started.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.transition.is_some() {
            return false;
        }
        self.transition = Some(Transition::start_after(
            now,
            Duration::from_millis(SKILL_BAR_DELAY_MS),
            Duration::from_millis(SKILL_BAR_DURATION_MS),
        ));
        true
    }

    /// Filled fraction of a bar whose target is `progress` percent.
    #[must_use]
    pub fn fill(&self, progress: u8, now: Instant) -> f32 {
        let target = f32::from(progress.min(100)) / 100.0;
        self.transition
            .map_or(0.0, |transition| target * transition.progress(now))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .is_some_and(|transition| !transition.is_finished(now))
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub skills: &'a [Skill],
    pub bars: SkillBars,
    pub now: Instant,
    pub columns: usize,
    pub height: f32,
    pub content_width: f32,
    pub reveal: f32,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.columns.max(1);
    let rows = ctx.skills.chunks(columns).fold(Column::new(), |column, chunk| {
        let row = chunk.iter().fold(
            Row::new().spacing(spacing::XL),
            |row, skill| row.push(skill_bar(skill, ctx.bars.fill(skill.progress, ctx.now))),
        );
        column.push(
            Container::new(row)
                .height(Length::Fixed(sizing::SKILL_ROW_HEIGHT))
                .align_y(alignment::Vertical::Center),
        )
    });

    SectionFrame {
        title: ctx.i18n.tr("skills-title"),
        subtitle: ctx.i18n.tr("skills-subtitle"),
        body: rows.into(),
        height: ctx.height,
        content_width: ctx.content_width,
        alternate: false,
        reveal: ctx.reveal,
    }
    .view()
}

fn skill_bar<'a, Message: 'a>(skill: &'a Skill, fill: f32) -> Element<'a, Message> {
    let label = Row::new()
        .push(Text::new(skill.name.as_str()).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(format!("{}%", skill.progress))
                .size(typography::BODY_SM)
                .style(styles::text::brand),
        );

    let filled = (fill.clamp(0.0, 1.0) * FILL_PORTIONS).round() as u16;
    let remaining = FILL_PORTIONS as u16 - filled;

    let mut track = Row::new().height(Length::Fixed(sizing::SKILL_BAR_HEIGHT));
    if filled > 0 {
        track = track.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::skill_fill),
        );
    }
    if remaining > 0 {
        track = track.push(Space::new().width(Length::FillPortion(remaining)));
    }

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(label)
        .push(
            Container::new(track)
                .width(Length::Fill)
                .style(styles::container::skill_track),
        )
        .into()
}
