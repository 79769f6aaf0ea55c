// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Typewriter**: Hero tagline typing and deleting cadence
//! - **Lightbox**: Staged content swap and zoom
//! - **Cursor**: Custom cursor smoothing and trail particles
//! - **Scroll**: Navbar, section highlighting and reveal thresholds
//! - **Counters**: Stats count-up and skill bar animation
//! - **Contact**: Contact form feedback timing and mail relay

// ==========================================================================
// Typewriter Defaults
// ==========================================================================

/// Delay before the first character is typed (in milliseconds).
pub const DEFAULT_TYPEWRITER_STARTUP_DELAY_MS: u64 = 1000;

/// Delay between two typed characters (in milliseconds).
pub const DEFAULT_TYPING_INTERVAL_MS: u64 = 100;

/// Delay between two deleted characters (in milliseconds).
pub const DEFAULT_DELETE_INTERVAL_MS: u64 = 50;

/// How long a fully typed phrase stays on screen (in milliseconds).
pub const DEFAULT_PAUSE_FULL_MS: u64 = 2000;

/// How long the empty line stays before the next phrase (in milliseconds).
pub const DEFAULT_PAUSE_EMPTY_MS: u64 = 500;

/// Minimum accepted interval for any typewriter timing (in milliseconds).
pub const MIN_TYPEWRITER_INTERVAL_MS: u64 = 10;

/// Maximum accepted interval for any typewriter timing (in milliseconds).
pub const MAX_TYPEWRITER_INTERVAL_MS: u64 = 10_000;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay between hiding the old lightbox content and revealing the new one.
pub const LIGHTBOX_SWAP_DELAY_MS: u64 = 200;

/// Scale applied to the lightbox panel while its content is hidden.
pub const LIGHTBOX_HIDDEN_SCALE: f32 = 0.9;

/// Magnification applied to the lightbox image while zoomed.
pub const LIGHTBOX_ZOOM_FACTOR: f32 = 2.0;

// ==========================================================================
// Cursor Defaults
// ==========================================================================

/// Fraction of the remaining distance the cursor ring covers per frame.
pub const CURSOR_RING_SMOOTHING: f32 = 0.15;

/// Fraction of the remaining distance the cursor dot covers per frame.
pub const CURSOR_DOT_SMOOTHING: f32 = 0.3;

/// Minimum time between two trail particles (in milliseconds).
pub const CURSOR_TRAIL_THROTTLE_MS: u64 = 30;

/// Lifetime of a trail particle (in milliseconds).
pub const CURSOR_TRAIL_LIFETIME_MS: u64 = 600;

/// Frame interval used for cursor and transition animations (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset after which the navbar switches to its "scrolled" style.
pub const NAVBAR_SCROLLED_THRESHOLD: f32 = 100.0;

/// Space kept above a section when jumping to it from the navbar.
pub const NAVBAR_SCROLL_OFFSET: f32 = 80.0;

/// Window width below which the navbar collapses into a hamburger menu.
pub const NAVBAR_COLLAPSE_WIDTH: f32 = 768.0;

/// Fraction of a section that must be visible for it to become active.
pub const SECTION_ACTIVE_THRESHOLD: f32 = 0.3;

/// Margin removed from every side of the viewport when tracking sections.
pub const SECTION_ACTIVE_MARGIN: f32 = 100.0;

/// Fraction of a section that must be visible to trigger its reveal.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Margin removed from the bottom of the viewport for reveal tracking.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Initial downward offset of a section waiting to be revealed.
pub const REVEAL_OFFSET: f32 = 30.0;

/// Duration of the reveal transition (in milliseconds).
pub const REVEAL_DURATION_MS: u64 = 600;

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Number of increments a stat counter takes to reach its target.
pub const STATS_COUNT_STEPS: u32 = 100;

/// Interval between two stat counter increments (in milliseconds).
pub const STATS_TICK_MS: u64 = 20;

/// Fraction of the stats/skills block that must be visible to start.
pub const COUNTER_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Delay before skill bars start filling (in milliseconds).
pub const SKILL_BAR_DELAY_MS: u64 = 200;

/// Duration of the skill bar fill transition (in milliseconds).
pub const SKILL_BAR_DURATION_MS: u64 = 1000;

/// Divisor turning a pointer offset into a card tilt angle (in degrees).
pub const CARD_TILT_DIVISOR: f32 = 20.0;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// How long the submit button shows the success state (in milliseconds).
pub const CONTACT_SUCCESS_RESET_MS: u64 = 3000;

/// Opacity of the submit button while a message is being sent.
pub const CONTACT_SENDING_OPACITY: f32 = 0.8;

/// Default mail relay endpoint.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Timeout applied to relay requests (in seconds).
pub const RELAY_TIMEOUT_SECS: u64 = 15;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Typewriter validation
    assert!(MIN_TYPEWRITER_INTERVAL_MS > 0);
    assert!(MAX_TYPEWRITER_INTERVAL_MS > MIN_TYPEWRITER_INTERVAL_MS);
    assert!(DEFAULT_DELETE_INTERVAL_MS < DEFAULT_TYPING_INTERVAL_MS);
    assert!(DEFAULT_PAUSE_EMPTY_MS < DEFAULT_PAUSE_FULL_MS);
    assert!(DEFAULT_TYPING_INTERVAL_MS >= MIN_TYPEWRITER_INTERVAL_MS);
    assert!(DEFAULT_PAUSE_FULL_MS <= MAX_TYPEWRITER_INTERVAL_MS);

    // Lightbox validation
    assert!(LIGHTBOX_SWAP_DELAY_MS > 0);
    assert!(LIGHTBOX_HIDDEN_SCALE > 0.0 && LIGHTBOX_HIDDEN_SCALE < 1.0);
    assert!(LIGHTBOX_ZOOM_FACTOR > 1.0);

    // Cursor validation
    assert!(CURSOR_RING_SMOOTHING > 0.0 && CURSOR_RING_SMOOTHING <= 1.0);
    assert!(CURSOR_DOT_SMOOTHING > CURSOR_RING_SMOOTHING);
    assert!(CURSOR_TRAIL_LIFETIME_MS > CURSOR_TRAIL_THROTTLE_MS);

    // Scroll validation
    assert!(SECTION_ACTIVE_THRESHOLD > 0.0 && SECTION_ACTIVE_THRESHOLD <= 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < SECTION_ACTIVE_THRESHOLD);

    // Counter validation
    assert!(STATS_COUNT_STEPS > 0);
    assert!(COUNTER_VISIBILITY_THRESHOLD > 0.0 && COUNTER_VISIBILITY_THRESHOLD <= 1.0);
    assert!(CARD_TILT_DIVISOR > 0.0);

    // Contact validation
    assert!(CONTACT_SENDING_OPACITY > 0.0 && CONTACT_SENDING_OPACITY < 1.0);
};
