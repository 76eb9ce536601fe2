//! Applying RSVP responses to an invitation/event pair

use super::event::{Event, EventError, Participant};
use super::invitation::{Invitation, InviteResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of processing an RSVP response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Whether the response was applied as requested
    pub success: bool,

    /// Human-readable outcome, surfaced verbatim to callers
    pub message: String,
}

impl ProcessingResult {
    fn success(message: impl Into<String>) -> Self {
        ProcessingResult {
            success: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        ProcessingResult {
            success: false,
            message: message.into(),
        }
    }
}

/// Transition driver for invitation responses
///
/// The single writer that moves an Invitation and its Event together:
/// capacity is checked and the roster appended in the same call, so the two
/// cannot diverge. `event` must be the event the invitation was issued for.
///
/// Business outcomes (already responded, event full) come back as the inner
/// [`ProcessingResult`]; contract violations (blank participant name) come
/// back as the outer [`EventError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseProcessor;

impl ResponseProcessor {
    pub fn new() -> Self {
        ResponseProcessor
    }

    /// Apply `response` to the invitation and its event
    pub fn process(
        &self,
        invitation: &mut Invitation,
        event: &mut Event,
        response: &InviteResponse,
    ) -> Result<ProcessingResult, EventError> {
        if invitation.has_responded() {
            return Ok(ProcessingResult::failure(
                "Invitation was already responded to previously",
            ));
        }

        match response {
            InviteResponse::Decline { reason } => {
                // Declines are always honored, full event or not.
                invitation.mark_declined(reason.clone());
                debug!(invitation_id = %invitation.id, "Decline recorded");
                Ok(ProcessingResult::success("Decline recorded"))
            }
            InviteResponse::Accept { name, note } => {
                if event.has_limit() && event.is_full() {
                    // The attempted accept becomes a system-issued decline
                    // rather than staying pending.
                    invitation.mark_declined("Event full");
                    debug!(invitation_id = %invitation.id, event_id = %event.id, "Accept on full event declined");
                    return Ok(ProcessingResult::failure("Event is already full"));
                }

                let participant = Participant::new(name.clone(), note.clone())?;
                event.confirm_participant(participant.clone())?;
                invitation.mark_accepted(participant);

                debug!(
                    invitation_id = %invitation.id,
                    event_id = %event.id,
                    confirmed = event.confirmed_count(),
                    "Participation confirmed"
                );
                Ok(ProcessingResult::success(
                    "Participation confirmed successfully",
                ))
            }
        }
    }
}
