//! User-facing notifications produced by the interactive session.

use std::fmt;

use crate::error::MergerError;
use crate::output::MessageLevel;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Neutral progress information.
    Info,
    /// An action completed.
    Success,
    /// An action did nothing, or completed with problems.
    Warning,
    /// An action failed.
    Error,
}

impl From<NotificationLevel> for MessageLevel {
    fn from(level: NotificationLevel) -> Self {
        match level {
            NotificationLevel::Info => Self::Info,
            NotificationLevel::Success => Self::Success,
            NotificationLevel::Warning => Self::Warning,
            NotificationLevel::Error => Self::Error,
        }
    }
}

/// One piece of feedback for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub content: String,
}

impl Notification {
    /// Create a notification.
    pub fn new(level: NotificationLevel, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Create an informational notification.
    pub fn info(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, content)
    }

    /// Create a success notification.
    pub fn success(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, content)
    }

    /// Create a warning notification.
    pub fn warning(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, content)
    }

    /// Create an error notification.
    pub fn error(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, content)
    }

    /// Turn a failed action into a notification.
    ///
    /// Empty-list and empty-selection errors are user slips, reported as
    /// warnings with a hint; anything else is an error.
    pub fn from_error(err: &MergerError) -> Self {
        match err {
            MergerError::NoInputsSelected => Self::warning("Nothing to merge", "Add PDF files first"),
            MergerError::NoSelectionForRemoval => {
                Self::warning("Nothing selected", "Select the files to remove first")
            }
            other => Self::error("Error", other.to_string()),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = MessageLevel::from(self.level).prefix();
        write!(f, "{prefix}{}: {}", self.title, self.content)
    }
}

/// Receives notifications from the session.
pub trait NotificationSink {
    /// Deliver one notification.
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
