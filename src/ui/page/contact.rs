// SPDX-License-Identifier: MPL-2.0
//! Contact section: details plus a four-field form sent through the mail
//! relay.
//!
//! The submit button walks Idle → Sending → Sent → Idle. Sent lasts
//! [`CONTACT_SUCCESS_RESET_MS`]; the timer carries the form generation so a
//! timer left over from an earlier send cannot cut a later Sent short.

use super::SectionFrame;
use crate::config::CONTACT_SUCCESS_RESET_MS;
use crate::content::Owner;
use crate::error::RelayError;
use crate::i18n::fluent::I18n;
use crate::relay::{ContactPayload, RelayClient};
use crate::ui::cursor::hover_zone;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button::SubmitLook;
use crate::ui::widgets::Spinner;
use iced::widget::{button, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Task};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Content width below which the details sit above the form.
const STACKED_WIDTH: f32 = 720.0;

/// Spinner turns per second.
const SPINNER_SPEED: f32 = 1.25;

/// Submit button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending { since: Instant },
    Sent,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    /// The relay answered.
    Finished(Result<(), RelayError>),
    /// The Sent display time elapsed for the given generation.
    ResetSubmit(u64),
    Hover(bool),
}

/// Outcomes the application turns into toasts or cursor state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Submit was pressed with an empty field.
    Incomplete,
    Sent { name: String },
    Failed,
    Hover(bool),
}

#[derive(Debug)]
pub struct Form {
    name: String,
    email: String,
    subject: String,
    message: text_editor::Content,
    submit: SubmitState,
    generation: u64,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: text_editor::Content::new(),
            submit: SubmitState::Idle,
            generation: 0,
        }
    }
}

impl Form {
    pub fn update(
        &mut self,
        message: Message,
        relay: &RelayClient,
        now: Instant,
    ) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(value) => self.name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::SubjectChanged(value) => self.subject = value,
            Message::MessageEdited(action) => self.message.perform(action),
            Message::Submit => return self.submit(relay, now),
            Message::Finished(result) => return self.finish(result),
            Message::ResetSubmit(generation) => {
                if generation == self.generation && self.submit == SubmitState::Sent {
                    self.submit = SubmitState::Idle;
                }
            }
            Message::Hover(hovering) => return (Event::Hover(hovering), Task::none()),
        }
        (Event::None, Task::none())
    }

    fn submit(&mut self, relay: &RelayClient, now: Instant) -> (Event, Task<Message>) {
        if self.submit != SubmitState::Idle {
            return (Event::None, Task::none());
        }
        if !self.is_complete() {
            return (Event::Incomplete, Task::none());
        }

        self.submit = SubmitState::Sending { since: now };
        let payload = ContactPayload::new(
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            self.subject.trim().to_string(),
            self.message_text(),
        );
        let relay = relay.clone();

        (
            Event::None,
            Task::perform(
                async move { relay.send(payload).await },
                Message::Finished,
            ),
        )
    }

    fn finish(&mut self, result: Result<(), RelayError>) -> (Event, Task<Message>) {
        if !matches!(self.submit, SubmitState::Sending { .. }) {
            return (Event::None, Task::none());
        }

        match result {
            Ok(()) => {
                let name = self.name.trim().to_string();
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message = text_editor::Content::new();
                self.submit = SubmitState::Sent;
                self.generation = self.generation.wrapping_add(1);

                let generation = self.generation;
                let reset = Task::perform(
                    async move {
                        tokio::time::sleep(Duration::from_millis(CONTACT_SUCCESS_RESET_MS)).await;
                        generation
                    },
                    Message::ResetSubmit,
                );
                (Event::Sent { name }, reset)
            }
            Err(err) => {
                log::error!("Contact form submission failed: {err}");
                self.submit = SubmitState::Idle;
                (Event::Failed, Task::none())
            }
        }
    }

    /// Whether all four fields hold something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject]
            .iter()
            .all(|field| !field.trim().is_empty())
            && !self.message_text().is_empty()
    }

    fn message_text(&self) -> String {
        self.message.text().trim().to_string()
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.submit, SubmitState::Sending { .. })
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a Form,
    pub owner: &'a Owner,
    pub now: Instant,
    pub height: f32,
    pub content_width: f32,
    pub reveal: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = form_view(&ctx);
    let details = details_view(&ctx);

    let body: Element<'a, Message> = if ctx.content_width < STACKED_WIDTH {
        Column::new()
            .spacing(spacing::LG)
            .push(details)
            .push(form)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(details).width(Length::FillPortion(1)))
            .push(Container::new(form).width(Length::FillPortion(2)))
            .into()
    };

    SectionFrame {
        title: ctx.i18n.tr("contact-title"),
        subtitle: ctx.i18n.tr("contact-subtitle"),
        body: Container::new(body)
            .height(Length::Fixed(sizing::CONTACT_BODY_HEIGHT))
            .into(),
        height: ctx.height,
        content_width: ctx.content_width,
        alternate: true,
        reveal: ctx.reveal,
    }
    .view()
}

fn details_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).push(
        Text::new(ctx.i18n.tr("contact-intro"))
            .size(typography::BODY_LG)
            .style(styles::text::muted),
    );
    if let Some(email) = &ctx.owner.email {
        column = column.push(Text::new(email.as_str()).style(styles::text::brand));
    }
    if let Some(location) = &ctx.owner.location {
        column = column.push(Text::new(location.as_str()).style(styles::text::faint));
    }
    column.into()
}

fn form_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx.form;
    let i18n = ctx.i18n;

    let field = |placeholder: String, value: &'a str, on_input: fn(String) -> Message| {
        text_input(&placeholder, value)
            .on_input(on_input)
            .padding(spacing::SM)
            .size(typography::BODY_LG)
            .width(Length::Fill)
    };

    let message = text_editor(&form.message)
        .placeholder(i18n.tr("contact-message"))
        .on_action(Message::MessageEdited)
        .padding(spacing::SM)
        .height(Length::Fixed(sizing::MESSAGE_INPUT_HEIGHT));

    Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(field(i18n.tr("contact-name"), &form.name, Message::NameChanged))
                .push(field(
                    i18n.tr("contact-email"),
                    &form.email,
                    Message::EmailChanged,
                )),
        )
        .push(field(
            i18n.tr("contact-subject"),
            &form.subject,
            Message::SubjectChanged,
        ))
        .push(message)
        .push(submit_button(ctx))
        .into()
}

fn submit_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (look, label) = match ctx.form.submit_state() {
        SubmitState::Idle => (SubmitLook::Idle, ctx.i18n.tr("contact-send")),
        SubmitState::Sending { .. } => (SubmitLook::Sending, ctx.i18n.tr("contact-sending")),
        SubmitState::Sent => (SubmitLook::Sent, ctx.i18n.tr("contact-sent")),
    };

    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    if let SubmitState::Sending { since } = ctx.form.submit_state() {
        let turns = ctx.now.saturating_duration_since(since).as_secs_f32() * SPINNER_SPEED;
        content = content.push(Spinner::new(palette::WHITE, turns.fract() * TAU).into_element());
    }
    content = content.push(Text::new(label).size(typography::BODY_LG));

    let mut submit = button(content)
        .padding([spacing::SM, spacing::LG])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::XS))
        .style(styles::button::submit(look));
    if look == SubmitLook::Idle {
        submit = submit.on_press(Message::Submit);
    }

    hover_zone(submit, Message::Hover)
}
