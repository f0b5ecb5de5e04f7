// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for form confirmations and for settings problems the user should
//! know about. A failed testimonials fetch is not toasted; the
//! section keeps its loading placeholder.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - queue, max three visible, same-key replacement, expiry on tick
//! - [`toast`] - rendering
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-contact-sent"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
