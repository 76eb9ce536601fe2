//! In-memory owner of events and invitations

use super::event::{Event, EventError};
use super::invitation::{Invitation, InviteResponse};
use super::permission::{EditPermission, EditPermissionService, User};
use super::processor::{ProcessingResult, ResponseProcessor};
use super::status::{EventStatusCalculator, OccupancyStatus};
use super::types::{EventId, InvitationId, Timestamp};
use super::validator::{InvitationValidator, ValidationResult};
use crate::config::InviteConfig;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

/// Registry operation errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Invitation not found")]
    InvitationNotFound,

    #[error(transparent)]
    Event(#[from] EventError),
}

/// Owns every event and invitation, keyed by id
///
/// Invitations reference their event by [`EventId`]; the registry resolves
/// that reference for validation and response processing. Because every
/// mutating operation takes `&mut self`, the capacity check and the roster
/// append behave as one atomic step even when an event is shared by many
/// invitations.
pub struct EventRegistry {
    events: HashMap<EventId, Event>,
    invitations: HashMap<InvitationId, Invitation>,
    default_invite_ttl: Duration,
    validator: InvitationValidator,
    processor: ResponseProcessor,
    status: EventStatusCalculator,
    permissions: EditPermissionService,
}

impl EventRegistry {
    /// Create a registry with the default invitation TTL
    pub fn new() -> Self {
        Self::with_config(&InviteConfig::default())
    }

    /// Create a registry using the given invitation settings
    pub fn with_config(config: &InviteConfig) -> Self {
        EventRegistry {
            events: HashMap::new(),
            invitations: HashMap::new(),
            default_invite_ttl: config.default_ttl,
            validator: InvitationValidator::new(),
            processor: ResponseProcessor::new(),
            status: EventStatusCalculator::new(),
            permissions: EditPermissionService::new(),
        }
    }

    /// Create and register an event
    pub fn create_event(
        &mut self,
        name: impl Into<String>,
        capacity: Option<u32>,
        scheduled_at: Timestamp,
    ) -> Result<EventId, EventError> {
        let event = Event::new(name, capacity, scheduled_at)?;
        let event_id = event.id.clone();
        info!(event_id = %event_id, name = %event.name, capacity = ?event.capacity, "Event created");
        self.events.insert(event_id.clone(), event);
        Ok(event_id)
    }

    /// Look up an event
    pub fn event(&self, event_id: &EventId) -> Result<&Event, RegistryError> {
        self.events.get(event_id).ok_or(RegistryError::EventNotFound)
    }

    /// Look up an invitation
    pub fn invitation(&self, invitation_id: &InvitationId) -> Result<&Invitation, RegistryError> {
        self.invitations
            .get(invitation_id)
            .ok_or(RegistryError::InvitationNotFound)
    }

    /// Issue an invitation for an event, expiring after the default TTL
    pub fn issue_invitation(&mut self, event_id: &EventId) -> Result<Invitation, RegistryError> {
        let expires_at = Timestamp::from_millis(
            Timestamp::now().as_millis() + self.default_invite_ttl.as_millis() as u64,
        );
        self.issue_invitation_expiring(event_id, expires_at)
    }

    /// Issue an invitation for an event with an explicit expiry
    pub fn issue_invitation_expiring(
        &mut self,
        event_id: &EventId,
        expires_at: Timestamp,
    ) -> Result<Invitation, RegistryError> {
        if !self.events.contains_key(event_id) {
            return Err(RegistryError::EventNotFound);
        }

        let invitation = Invitation::issue(event_id.clone(), expires_at);
        info!(invitation_id = %invitation.id, event_id = %event_id, "Invitation issued");
        self.invitations
            .insert(invitation.id.clone(), invitation.clone());
        Ok(invitation)
    }

    /// Check whether an invitation is usable right now
    pub fn validate_invitation(
        &self,
        invitation_id: &InvitationId,
    ) -> Result<ValidationResult, RegistryError> {
        let invitation = self.invitation(invitation_id)?;
        let event = self
            .events
            .get(&invitation.event_id)
            .ok_or(RegistryError::EventNotFound)?;
        Ok(self.validator.validate(invitation, event))
    }

    /// Apply an RSVP response to an invitation and its event
    pub fn respond(
        &mut self,
        invitation_id: &InvitationId,
        response: &InviteResponse,
    ) -> Result<ProcessingResult, RegistryError> {
        let invitation = self
            .invitations
            .get_mut(invitation_id)
            .ok_or(RegistryError::InvitationNotFound)?;
        let event = self
            .events
            .get_mut(&invitation.event_id)
            .ok_or(RegistryError::EventNotFound)?;

        let result = self.processor.process(invitation, event, response)?;
        info!(
            invitation_id = %invitation_id,
            success = result.success,
            message = %result.message,
            "Response processed"
        );
        Ok(result)
    }

    /// Occupancy classification of an event
    pub fn occupancy_status(&self, event_id: &EventId) -> Result<OccupancyStatus, RegistryError> {
        Ok(self.status.calculate(self.event(event_id)?))
    }

    /// Edit permission of a user over an event
    pub fn check_edit_permission(
        &self,
        user: &User,
        event_id: &EventId,
    ) -> Result<EditPermission, RegistryError> {
        Ok(self.permissions.check_edit_permission(user, self.event(event_id)?))
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}
