// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! application owns their state, forwards their messages, and reacts to the
//! events they return.
//!
//! # Page
//!
//! - [`navbar`] - Section links, hamburger menu and theme toggle
//! - [`page`] - Hero, about, skills, portfolio, experience and contact
//! - [`lightbox`] - Modal project viewer with zoom
//! - [`cursor`] - Ring, dot and trail following the pointer
//! - [`notifications`] - Toasts for form results and startup warnings
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Section positions for a window size
//! - [`state`] - Pure state machines (typewriter, sections, counters)
//! - [`widgets`] - Custom Iced widgets (scroll lock, spinner)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod cursor;
pub mod design_tokens;
pub mod layout;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
