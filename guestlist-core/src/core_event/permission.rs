//! Edit permission rules for events

use super::event::Event;
use super::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A user of the system
///
/// Only the organizer flag matters to the permission rules; the variants
/// carry the same identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum User {
    /// Can create and edit events, subject to date/confirmation rules
    Organizer {
        id: UserId,
        name: String,
        email: String,
    },
    /// Cannot edit events
    Regular {
        id: UserId,
        name: String,
        email: String,
    },
}

impl User {
    pub fn organizer(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        User::Organizer {
            id: UserId::new(id.into()),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn regular(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        User::Regular {
            id: UserId::new(id.into()),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_organizer(&self) -> bool {
        matches!(self, User::Organizer { .. })
    }

    pub fn id(&self) -> &UserId {
        match self {
            User::Organizer { id, .. } | User::Regular { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            User::Organizer { name, .. } | User::Regular { name, .. } => name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            User::Organizer { email, .. } | User::Regular { email, .. } => email,
        }
    }
}

/// How much of an event a user may edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionKind {
    /// All aspects of the event
    Full,
    /// Only some aspects (the event has confirmations)
    Limited,
    /// Nothing; the event already took place
    Blocked,
    /// Nothing; the user is not an organizer
    Denied,
}

/// Permission classification with its justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPermission {
    pub kind: PermissionKind,

    /// Why this permission was granted or withheld
    pub justification: String,
}

impl EditPermission {
    fn new(kind: PermissionKind, justification: impl Into<String>) -> Self {
        EditPermission {
            kind,
            justification: justification.into(),
        }
    }
}

/// Derives an [`EditPermission`] from a user and an event
///
/// Rules run in a fixed order: organizer check, then event date, then
/// confirmations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditPermissionService;

impl EditPermissionService {
    pub fn new() -> Self {
        EditPermissionService
    }

    pub fn check_edit_permission(&self, user: &User, event: &Event) -> EditPermission {
        if !user.is_organizer() {
            return EditPermission::new(PermissionKind::Denied, "Only organizers can edit events");
        }

        let upcoming = event.scheduled_at > Timestamp::now();
        if !upcoming {
            return EditPermission::new(PermissionKind::Blocked, "Past events cannot be edited");
        }

        if event.confirmed_count() > 0 {
            return EditPermission::new(
                PermissionKind::Limited,
                "Events with confirmations allow only limited edits",
            );
        }

        EditPermission::new(PermissionKind::Full, "Full edit permitted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_event::event::Participant;

    const DAY_MILLIS: u64 = 24 * 60 * 60 * 1000;

    fn organizer() -> User {
        User::organizer("ORG-001", "Joana Silva", "joana@example.com")
    }

    fn regular_user() -> User {
        User::regular("USR-001", "Maria Santos", "maria@example.com")
    }

    fn upcoming_event() -> Event {
        let scheduled = Timestamp::from_millis(Timestamp::now().as_millis() + 30 * DAY_MILLIS);
        Event::new("Test Event", Some(100), scheduled).unwrap()
    }

    /// An event whose scheduled time is the construction instant; by the
    /// time a check runs it is no longer strictly in the future.
    fn event_happening_now() -> Event {
        Event::new("Test Event", Some(100), Timestamp::now()).unwrap()
    }

    #[test]
    fn test_user_accessors() {
        let user = organizer();
        assert!(user.is_organizer());
        assert_eq!(user.id(), &UserId::new("ORG-001".to_string()));
        assert_eq!(user.name(), "Joana Silva");
        assert_eq!(user.email(), "joana@example.com");

        assert!(!regular_user().is_organizer());
    }

    #[test]
    fn test_regular_user_is_denied() {
        let service = EditPermissionService::new();
        let permission = service.check_edit_permission(&regular_user(), &upcoming_event());

        assert_eq!(permission.kind, PermissionKind::Denied);
        assert_eq!(permission.justification, "Only organizers can edit events");
    }

    #[test]
    fn test_regular_user_denied_even_with_confirmations() {
        let service = EditPermissionService::new();
        let mut event = upcoming_event();
        event
            .confirm_participant(Participant::new("Guest", None).unwrap())
            .unwrap();

        let permission = service.check_edit_permission(&regular_user(), &event);
        assert_eq!(permission.kind, PermissionKind::Denied);
    }

    #[test]
    fn test_organizer_blocked_on_past_event() {
        let service = EditPermissionService::new();
        let permission = service.check_edit_permission(&organizer(), &event_happening_now());

        assert_eq!(permission.kind, PermissionKind::Blocked);
        assert_eq!(permission.justification, "Past events cannot be edited");
    }

    #[test]
    fn test_organizer_limited_with_confirmations() {
        let service = EditPermissionService::new();
        let mut event = upcoming_event();
        event
            .confirm_participant(Participant::new("Guest", None).unwrap())
            .unwrap();

        let permission = service.check_edit_permission(&organizer(), &event);

        assert_eq!(permission.kind, PermissionKind::Limited);
        assert_eq!(
            permission.justification,
            "Events with confirmations allow only limited edits"
        );
    }

    #[test]
    fn test_organizer_full_without_confirmations() {
        let service = EditPermissionService::new();
        let permission = service.check_edit_permission(&organizer(), &upcoming_event());

        assert_eq!(permission.kind, PermissionKind::Full);
        assert_eq!(permission.justification, "Full edit permitted");
    }
}
