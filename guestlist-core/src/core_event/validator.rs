//! Invitation usability checks

use super::event::Event;
use super::invitation::{Invitation, VALID_TOKEN_PREFIX};
use super::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Outcome of validating an invitation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the invitation is usable right now
    pub valid: bool,

    /// Error message when not usable
    pub error: Option<String>,
}

impl ValidationResult {
    fn pass() -> Self {
        ValidationResult {
            valid: true,
            error: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// Stateless rule evaluator: is an invitation usable right now?
///
/// Rules run in a fixed order and the first failure wins: token shape,
/// then expiry, then event fullness. An expired invitation with a bad
/// token therefore reports the token problem, and a valid unexpired
/// token on a full event reports the fullness.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvitationValidator;

impl InvitationValidator {
    pub fn new() -> Self {
        InvitationValidator
    }

    /// Validate `invitation` against the event it was issued for
    pub fn validate(&self, invitation: &Invitation, event: &Event) -> ValidationResult {
        if !invitation.token.starts_with(VALID_TOKEN_PREFIX) {
            return ValidationResult::fail("Invalid invitation token");
        }

        if invitation.expires_at < Timestamp::now() {
            return ValidationResult::fail("The invitation token has expired");
        }

        if event.has_limit() && event.is_full() {
            return ValidationResult::fail(
                "Event already reached the maximum number of participants",
            );
        }

        ValidationResult::pass()
    }
}
