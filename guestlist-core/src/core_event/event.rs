//! Event data structures and capacity rules

use super::types::{EventId, Timestamp};
use serde::{Deserialize, Serialize};

/// A confirmed attendee of an event
///
/// Immutable value, created when an invitation response is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Attendee name (never blank)
    pub name: String,

    /// Optional free-text note (e.g. "I'll bring dessert")
    pub note: Option<String>,
}

impl Participant {
    /// Create a participant, rejecting blank names
    pub fn new(name: impl Into<String>, note: Option<String>) -> Result<Self, EventError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EventError::BlankParticipantName);
        }
        Ok(Participant { name, note })
    }
}

/// An event with an optional participant capacity
///
/// The roster can only grow, and only through [`Event::confirm_participant`],
/// which enforces the capacity ceiling. Identity fields are fixed at
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,

    /// Human-readable name
    pub name: String,

    /// Maximum number of participants (None = unlimited)
    pub capacity: Option<u32>,

    /// When the event takes place
    pub scheduled_at: Timestamp,

    /// When the event was created
    pub created_at: Timestamp,

    /// Confirmed participants, in confirmation order
    confirmed: Vec<Participant>,
}

impl Event {
    /// Create a new event
    ///
    /// The scheduled time must not lie in the past. Comparison truncates to
    /// whole seconds so a time captured in the same instant as "now" is
    /// accepted.
    pub fn new(
        name: impl Into<String>,
        capacity: Option<u32>,
        scheduled_at: Timestamp,
    ) -> Result<Self, EventError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EventError::BlankEventName);
        }

        let now = Timestamp::now();
        if scheduled_at < now && scheduled_at.as_secs() != now.as_secs() {
            return Err(EventError::InvalidEventDate);
        }

        Ok(Event {
            id: EventId::generate(),
            name,
            capacity,
            scheduled_at,
            created_at: now,
            confirmed: Vec::new(),
        })
    }

    /// Confirm a participant, enforcing the capacity ceiling
    ///
    /// This is the sole mutation entry point for the roster. Fails with
    /// [`EventError::CapacityExceeded`] when the event is already full; the
    /// roster is left untouched in that case.
    pub fn confirm_participant(&mut self, participant: Participant) -> Result<(), EventError> {
        if self.is_full() {
            return Err(EventError::CapacityExceeded);
        }

        self.confirmed.push(participant);
        Ok(())
    }

    /// Whether the event has a participant capacity
    pub fn has_limit(&self) -> bool {
        self.capacity.is_some()
    }

    /// Whether the event reached its capacity (always false when unlimited)
    pub fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.confirmed.len() >= capacity as usize,
            None => false,
        }
    }

    /// Number of confirmed participants
    pub fn confirmed_count(&self) -> usize {
        self.confirmed.len()
    }

    /// Confirmed participants, in confirmation order
    pub fn confirmed(&self) -> &[Participant] {
        &self.confirmed
    }

    /// Confirmed participants as an integer percentage of capacity
    ///
    /// Truncating division: 33 of 100 is 33, 85 of 100 is 85. Unlimited
    /// events report 0.
    pub fn occupancy_percent(&self) -> u32 {
        match self.capacity {
            Some(capacity) if capacity > 0 => {
                ((self.confirmed.len() * 100) / capacity as usize) as u32
            }
            // Zero capacity: full from the start.
            Some(_) => 100,
            None => 0,
        }
    }
}

/// Event operation errors
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Event already reached the maximum number of participants")]
    CapacityExceeded,

    #[error("Event date cannot be in the past")]
    InvalidEventDate,

    #[error("Event name cannot be blank")]
    BlankEventName,

    #[error("Participant name cannot be blank")]
    BlankParticipantName,
}
