//! Notification boundary and its in-memory double

use super::event::Event;
use super::invitation::Invitation;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Outbound notification channel
///
/// Fire-and-forget: implementations send and return nothing; delivery
/// failures are the implementation's concern, never the caller's.
pub trait Notifier {
    /// Announce an invitation to its recipient
    fn send_invite(&mut self, recipient: &str, invitation: &Invitation);

    /// Confirm the recipient's attendance at an event
    fn send_confirmation(&mut self, recipient: &str, event: &Event);

    /// Tell the recipient an event changed
    fn send_alteration_notice(&mut self, recipient: &str, event: &Event);
}

/// A message captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// In-memory [`Notifier`] that records every message for inspection
///
/// Used by tests and the demo command in place of a real mail gateway.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Vec<SentEmail>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier { sent: Vec::new() }
    }

    /// Every message sent so far, oldest first
    pub fn sent(&self) -> &[SentEmail] {
        &self.sent
    }

    /// Number of messages sent so far
    pub fn count(&self) -> usize {
        self.sent.len()
    }

    /// Forget all recorded messages
    pub fn clear(&mut self) {
        self.sent.clear();
    }

    fn record(&mut self, recipient: &str, subject: &str, body: String) {
        info!(recipient = %recipient, subject = %subject, "Email sent");
        self.sent.push(SentEmail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body,
        });
    }
}

impl Notifier for RecordingNotifier {
    fn send_invite(&mut self, recipient: &str, invitation: &Invitation) {
        let body = format!(
            "[INVITE] You are invited to event {}",
            invitation.event_id
        );
        self.record(recipient, "Event invitation", body);
    }

    fn send_confirmation(&mut self, recipient: &str, event: &Event) {
        let body = format!(
            "[CONFIRMATION] Your attendance at '{}' is confirmed!",
            event.name
        );
        self.record(recipient, "Attendance confirmed", body);
    }

    fn send_alteration_notice(&mut self, recipient: &str, event: &Event) {
        let body = format!("[UPDATE] Event '{}' has changed. Check the details.", event.name);
        self.record(recipient, "Event updated", body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_event::types::{EventId, Timestamp};

    const DAY_MILLIS: u64 = 24 * 60 * 60 * 1000;

    fn future_event() -> Event {
        let scheduled = Timestamp::from_millis(Timestamp::now().as_millis() + 30 * DAY_MILLIS);
        Event::new("Wedding Party", Some(100), scheduled).unwrap()
    }

    #[test]
    fn test_invite_is_recorded() {
        let mut notifier = RecordingNotifier::new();
        let event = future_event();
        let expires = Timestamp::from_millis(Timestamp::now().as_millis() + DAY_MILLIS);
        let invitation = Invitation::issue(event.id.clone(), expires);

        notifier.send_invite("joana@example.com", &invitation);

        assert_eq!(notifier.count(), 1);
        let email = &notifier.sent()[0];
        assert_eq!(email.recipient, "joana@example.com");
        assert_eq!(email.subject, "Event invitation");
        assert!(email.body.contains(&invitation.event_id.to_string()));
    }

    #[test]
    fn test_confirmation_and_alteration_are_recorded() {
        let mut notifier = RecordingNotifier::new();
        let event = future_event();

        notifier.send_confirmation("maria@example.com", &event);
        notifier.send_alteration_notice("maria@example.com", &event);

        assert_eq!(notifier.count(), 2);
        assert!(notifier.sent()[0].body.contains("Wedding Party"));
        assert_eq!(notifier.sent()[1].subject, "Event updated");
    }

    #[test]
    fn test_clear_forgets_messages() {
        let mut notifier = RecordingNotifier::new();
        notifier.send_confirmation("a@example.com", &future_event());
        assert_eq!(notifier.count(), 1);

        notifier.clear();
        assert_eq!(notifier.count(), 0);
        assert!(notifier.sent().is_empty());
    }
}
