//! User-facing status messages.
//!
//! The rename command reports every outcome (success, displaced structure,
//! cancellation, failure) as a [`Notification`] handed to the host. The
//! in-memory document collects them in a [`NotificationCollection`] so the
//! caller can inspect what the user would have seen.

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A structure was renamed.
    Info,
    /// The command stopped without writing anything.
    Warning,
    /// A write failed and the command was rolled back.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "Info"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// The message text.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Error, message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications across one or more commands.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Message texts in the order they were reported.
    pub fn messages(&self) -> Vec<&str> {
        self.items.iter().map(|n| n.message.as_str()).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Remove and return everything collected so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.push(Notification::info("Structure S20 changed to S10"));
        c.push(Notification::warning("Canceled. Invalid name"));

        assert_eq!(c.len(), 2);
        assert!(c.has_type(NotificationType::Warning));
        assert!(!c.has_type(NotificationType::Error));
        assert_eq!(
            c.messages(),
            vec!["Structure S20 changed to S10", "Canceled. Invalid name"]
        );
    }

    #[test]
    fn test_drain() {
        let mut c = NotificationCollection::new();
        c.push(Notification::error("Failed to update structure name. locked"));
        let drained = c.drain();
        assert_eq!(drained.len(), 1);
        assert!(c.is_empty());
    }

    #[test]
    fn test_display() {
        let n = Notification::warning("Canceled.");
        assert_eq!(format!("{}", n), "[Warning] Canceled.");
    }
}
