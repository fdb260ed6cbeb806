//! Transient notification banners
//!
//! A banner carries its own dismiss deadline; the page script removes it
//! after [`AUTO_DISMISS`] unless the close button gets there first. Loading a
//! new page replaces the banner and drops its timer with it.

use super::html::escape;
use std::time::Duration;

/// How long a banner stays on screen
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

/// Outcome codes carried across the post/redirect/get cycle in `?notice=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    CreateFailed,
    LoadFailed,
}

impl Notice {
    pub fn as_str(self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::CreateFailed => "create_failed",
            Notice::LoadFailed => "load_failed",
        }
    }

    /// Unknown codes are ignored rather than rejected
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "created" => Some(Notice::Created),
            "create_failed" => Some(Notice::CreateFailed),
            "load_failed" => Some(Notice::LoadFailed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="notification {class}" role="status" data-dismiss-after-ms="{ms}">
  <span>{message}</span>
  <button type="button" class="notification-close" aria-label="Dismiss">&times;</button>
</div>"#,
            class = self.kind.css_class(),
            ms = AUTO_DISMISS.as_millis(),
            message = escape(&self.message),
        )
    }
}

impl From<Notice> for Notification {
    fn from(notice: Notice) -> Self {
        match notice {
            Notice::Created => Notification::success("User created successfully!"),
            Notice::CreateFailed => Notification::error("Failed to create user"),
            Notice::LoadFailed => Notification::error("Failed to load users"),
        }
    }
}
