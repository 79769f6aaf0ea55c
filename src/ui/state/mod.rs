// SPDX-License-Identifier: MPL-2.0
//! Pure UI state machines.
//!
//! Nothing in here touches Iced widgets or timers; the components own these
//! values and drive them from messages.

pub mod counter;
pub mod sections;
pub mod transition;
pub mod typewriter;
pub mod zoom;

pub use counter::CountUp;
pub use sections::{Band, PageViewport, SectionId, SectionTracker};
pub use transition::Transition;
pub use typewriter::Typewriter;
pub use zoom::ZoomOrigin;
