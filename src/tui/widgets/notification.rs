//! Toast notification widget
//!
//! Displays temporary notifications to the user. The queue doubles as the
//! wizard's notifier, so validation failures show up as error toasts.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::wizard::Notifier;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Error => "x",
        }
    }

    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// How long to display it
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set the display duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();
        let icon = self.notification.notification_type.icon();
        let title = self.notification.notification_type.title();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications to display, oldest first
#[derive(Debug)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
    duration: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl NotificationQueue {
    /// Create a queue whose notifications last `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            notifications: Vec::new(),
            duration,
        }
    }

    /// Add a notification, applying the queue's display duration
    pub fn push(&mut self, notification: Notification) {
        self.notifications
            .push(notification.with_duration(self.duration));
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl Notifier for NotificationQueue {
    fn notify_error(&mut self, message: &str) {
        self.push(Notification::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("Test message");
        assert_eq!(n.message, "Test message");
        assert_eq!(n.notification_type, NotificationType::Info);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Info.color(), Color::Blue);
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_queue_as_notifier() {
        let mut queue = NotificationQueue::default();
        queue.notify_error("Please fill all required fields.");

        assert_eq!(queue.len(), 1);
        let current = queue.current().unwrap();
        assert_eq!(current.notification_type, NotificationType::Error);
        assert_eq!(current.message, "Please fill all required fields.");
    }

    #[test]
    fn test_zero_duration_expires() {
        let mut queue = NotificationQueue::new(Duration::ZERO);
        queue.push(Notification::success("done"));
        queue.remove_expired();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_order() {
        let mut queue = NotificationQueue::new(Duration::from_secs(60));
        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));
        queue.remove_expired();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");

        queue.clear();
        assert!(queue.is_empty());
    }
}
