//! Common identifier and timestamp types for the event domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a timestamp representing the current time
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_millis() as u64)
    }

    /// Create a timestamp from milliseconds since epoch
    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    /// Get milliseconds since epoch
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Get whole seconds since epoch (sub-second part discarded)
    pub fn as_secs(&self) -> u64 {
        self.0 / 1000
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: String) -> Self {
        EventId(id)
    }

    pub fn generate() -> Self {
        use uuid::Uuid;
        EventId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an invitation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvitationId(pub String);

impl InvitationId {
    pub fn new(id: String) -> Self {
        InvitationId(id)
    }

    pub fn generate() -> Self {
        use uuid::Uuid;
        InvitationId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for InvitationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: String) -> Self {
        UserId(id)
    }

    pub fn generate() -> Self {
        use uuid::Uuid;
        UserId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_creation() {
        let ts1 = Timestamp::now();
        let ts2 = Timestamp::now();
        assert!(ts2.as_millis() >= ts1.as_millis());
    }

    #[test]
    fn test_timestamp_from_millis() {
        let ts = Timestamp::from_millis(1234567890);
        assert_eq!(ts.as_millis(), 1234567890);
    }

    #[test]
    fn test_timestamp_ordering() {
        let ts1 = Timestamp::from_millis(100);
        let ts2 = Timestamp::from_millis(200);
        assert!(ts1 < ts2);
    }

    #[test]
    fn test_timestamp_whole_seconds() {
        assert_eq!(Timestamp::from_millis(1999).as_secs(), 1);
        assert_eq!(Timestamp::from_millis(2000).as_secs(), 2);
        assert_eq!(Timestamp::from_millis(2001).as_secs(), 2);
    }

    #[test]
    fn test_event_id_generation() {
        let id1 = EventId::generate();
        let id2 = EventId::generate();
        assert_ne!(id1, id2);
        assert!(!id1.0.is_empty());
    }

    #[test]
    fn test_invitation_id_generation() {
        let id1 = InvitationId::generate();
        let id2 = InvitationId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new("alice".to_string());
        assert_eq!(format!("{}", id), "alice");
    }
}
