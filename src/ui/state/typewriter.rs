// SPDX-License-Identifier: MPL-2.0
//! Typewriter state for the hero tagline.
//!
//! The cycler types a phrase one character at a time, holds it, deletes it
//! faster than it was typed, holds the empty line, then moves on to the next
//! phrase, forever. It is a plain value: [`Typewriter::tick`] performs one
//! step and returns how long to wait before the next one, leaving the actual
//! scheduling to the caller.

use crate::config::TypewriterTimings;
use std::time::Duration;

/// Where the cycler is in its type/hold/delete/hold loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending one character per tick.
    Typing,
    /// Holding the fully typed phrase.
    PausingFull,
    /// Removing one character per tick.
    Deleting,
    /// Holding the empty line before the next phrase.
    PausingEmpty,
}

/// Phrase cycle driving the typewriter effect.
///
/// Invariant: `char_count <= phrase length` (in `char`s) at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    /// Cached `chars().count()` of each phrase.
    lengths: Vec<usize>,
    phrase_index: usize,
    char_count: usize,
    phase: Phase,
    timings: TypewriterTimings,
}

impl Typewriter {
    /// Creates a cycler positioned before the first character of the first
    /// phrase. Returns `None` when `phrases` is empty.
    #[must_use]
    pub fn new(phrases: Vec<String>, timings: TypewriterTimings) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }

        let lengths = phrases.iter().map(|phrase| phrase.chars().count()).collect();

        Some(Self {
            phrases,
            lengths,
            phrase_index: 0,
            char_count: 0,
            phase: Phase::Typing,
            timings,
        })
    }

    /// Delay before the very first tick.
    #[must_use]
    pub fn startup_delay(&self) -> Duration {
        self.timings.startup_delay
    }

    /// Performs one step and returns the delay until the next one.
    ///
    /// A step after a pause acts in the new direction right away, so the
    /// pause is the only gap between the last typed character and the first
    /// deleted one.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => self.type_char(),
            Phase::PausingFull => {
                self.phase = Phase::Deleting;
                self.delete_char()
            }
            Phase::Deleting => self.delete_char(),
            Phase::PausingEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                self.type_char()
            }
        }
    }

    fn type_char(&mut self) -> Duration {
        let length = self.current_length();
        self.char_count = (self.char_count + 1).min(length);

        if self.char_count == length {
            self.phase = Phase::PausingFull;
            self.timings.pause_full
        } else {
            self.timings.typing_interval
        }
    }

    fn delete_char(&mut self) -> Duration {
        self.char_count = self.char_count.saturating_sub(1);

        if self.char_count == 0 {
            self.phase = Phase::PausingEmpty;
            self.timings.pause_empty
        } else {
            self.timings.delete_interval
        }
    }

    fn current_length(&self) -> usize {
        self.lengths[self.phrase_index]
    }

    /// The prefix of the active phrase currently on screen.
    #[must_use]
    pub fn displayed(&self) -> &str {
        let phrase = &self.phrases[self.phrase_index];
        let end = phrase
            .char_indices()
            .nth(self.char_count)
            .map_or(phrase.len(), |(byte_index, _)| byte_index);
        &phrase[..end]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether characters are being (or about to be) removed.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::PausingFull | Phase::Deleting)
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}
