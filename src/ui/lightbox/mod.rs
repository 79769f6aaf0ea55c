// SPDX-License-Identifier: MPL-2.0
//! Modal project gallery with staged content swaps and click-to-zoom.
//!
//! - [`state`] - The pure [`Lightbox`](state::Lightbox) state machine
//! - [`component`] - Messages, effects and timers around it
//! - [`view`] - Overlay rendering

pub mod component;
pub mod state;
pub mod view;

pub use component::{Effect, Message, State};
pub use state::{Lightbox, PanelPhase, SwapTicket};
