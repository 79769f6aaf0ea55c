// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for the contact form outcome and for configuration or content
//! fallbacks at startup. Success and info toasts leave after 4 seconds,
//! warnings after 6; errors stay until dismissed. At most three toasts are
//! visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
