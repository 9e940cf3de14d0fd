//! Notification module
//!
//! Transient toasts for status messages and the modal alert used to report
//! rejected usernames.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
