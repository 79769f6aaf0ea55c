// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an interactive personal portfolio built with the Iced GUI
//! framework.
//!
//! It renders a single scrolling page (hero, about, skills, project gallery,
//! experience and contact) with scroll-driven animations, a zoomable
//! lightbox, Fluent localization and a contact form delivered through a
//! mail relay.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod relay;
pub mod ui;
