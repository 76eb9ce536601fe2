//! Event invitations and RSVP responses

use super::event::Participant;
use super::types::{EventId, InvitationId, Timestamp};
use serde::{Deserialize, Serialize};

/// Prefix every legitimately issued invitation token starts with
pub const VALID_TOKEN_PREFIX: &str = "TOKEN_VALIDO";

/// Response state of an invitation
///
/// Transitions only Pending -> Accepted or Pending -> Declined, never back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsvpState {
    /// Not yet responded to
    Pending,
    /// Accepted; carries the confirmed participant
    Accepted(Participant),
    /// Declined; carries the reason
    Declined(String),
}

/// A caller-supplied answer to an invitation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InviteResponse {
    /// Attend, under the given name, with an optional note
    Accept { name: String, note: Option<String> },
    /// Not attending
    Decline { reason: String },
}

/// An invitation to a single event
///
/// Holds the token and expiry used for validation and the response state.
/// The event is referenced by id, never owned; resolving the reference is
/// the registry's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// Unique identifier
    pub id: InvitationId,

    /// The event this invitation is for
    pub event_id: EventId,

    /// Opaque token identifying the invitation as legitimately issued
    pub token: String,

    /// When the token stops being usable
    pub expires_at: Timestamp,

    /// When the invitation was issued
    pub created_at: Timestamp,

    /// Response state; transitions via `mark_accepted` / `mark_declined`
    state: RsvpState,
}

impl Invitation {
    /// Create an invitation with a caller-supplied token
    pub fn new(event_id: EventId, token: impl Into<String>, expires_at: Timestamp) -> Self {
        Invitation {
            id: InvitationId::generate(),
            event_id,
            token: token.into(),
            expires_at,
            created_at: Timestamp::now(),
            state: RsvpState::Pending,
        }
    }

    /// Issue an invitation with a freshly generated token
    ///
    /// The token is the valid prefix followed by a random 8-character code.
    pub fn issue(event_id: EventId, expires_at: Timestamp) -> Self {
        let token = format!("{}_{}", VALID_TOKEN_PREFIX, Self::generate_token_code());
        Self::new(event_id, token, expires_at)
    }

    /// Whether any response was recorded
    pub fn has_responded(&self) -> bool {
        !matches!(self.state, RsvpState::Pending)
    }

    /// Whether the invitation was responded to and accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self.state, RsvpState::Accepted(_))
    }

    /// Whether the invitation was responded to and not accepted
    pub fn is_declined(&self) -> bool {
        matches!(self.state, RsvpState::Declined(_))
    }

    /// The confirmed participant, if accepted
    pub fn participant(&self) -> Option<&Participant> {
        match &self.state {
            RsvpState::Accepted(participant) => Some(participant),
            _ => None,
        }
    }

    /// The decline reason, if declined
    pub fn decline_reason(&self) -> Option<&str> {
        match &self.state {
            RsvpState::Declined(reason) => Some(reason),
            _ => None,
        }
    }

    /// Current response state
    pub fn state(&self) -> &RsvpState {
        &self.state
    }

    /// Record an acceptance. Irreversible.
    ///
    /// Does not re-check a prior response; that check belongs to the
    /// response processor.
    pub fn mark_accepted(&mut self, participant: Participant) {
        self.state = RsvpState::Accepted(participant);
    }

    /// Record a decline. Irreversible.
    pub fn mark_declined(&mut self, reason: impl Into<String>) {
        self.state = RsvpState::Declined(reason.into());
    }

    /// Generate a random token code
    fn generate_token_code() -> String {
        use rand::Rng;
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        const CODE_LEN: usize = 8;

        let mut rng = rand::rng();
        (0..CODE_LEN)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_invitation() -> Invitation {
        let expires = Timestamp::from_millis(Timestamp::now().as_millis() + 3600000);
        Invitation::new(EventId::generate(), "TOKEN_VALIDO_TEST", expires)
    }

    #[test]
    fn test_new_invitation_is_pending() {
        let invitation = fresh_invitation();

        assert!(!invitation.has_responded());
        assert!(!invitation.is_accepted());
        assert!(!invitation.is_declined());
        assert_eq!(invitation.state(), &RsvpState::Pending);
    }

    #[test]
    fn test_mark_accepted() {
        let mut invitation = fresh_invitation();
        let participant = Participant::new("Carlos", Some("I'll bring drinks".into())).unwrap();

        invitation.mark_accepted(participant.clone());

        assert!(invitation.has_responded());
        assert!(invitation.is_accepted());
        assert!(!invitation.is_declined());
        assert_eq!(invitation.participant(), Some(&participant));
        assert_eq!(invitation.decline_reason(), None);
    }

    #[test]
    fn test_mark_declined() {
        let mut invitation = fresh_invitation();

        invitation.mark_declined("Other plans");

        assert!(invitation.has_responded());
        assert!(!invitation.is_accepted());
        assert!(invitation.is_declined());
        assert_eq!(invitation.decline_reason(), Some("Other plans"));
        assert_eq!(invitation.participant(), None);
    }

    #[test]
    fn test_issued_token_format() {
        let expires = Timestamp::from_millis(Timestamp::now().as_millis() + 3600000);
        let invitation = Invitation::issue(EventId::generate(), expires);

        assert!(invitation.token.starts_with(VALID_TOKEN_PREFIX));
        let code = invitation
            .token
            .strip_prefix("TOKEN_VALIDO_")
            .expect("issued token carries prefix and separator");
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_issued_tokens_differ() {
        let expires = Timestamp::from_millis(Timestamp::now().as_millis() + 3600000);
        let a = Invitation::issue(EventId::generate(), expires);
        let b = Invitation::issue(EventId::generate(), expires);
        assert_ne!(a.id, b.id);
        assert_ne!(a.token, b.token);
    }
}
