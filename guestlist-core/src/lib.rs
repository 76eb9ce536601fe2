//! guestlist-core: event invitations and RSVP processing
//!
//! The decision logic for a small event-management domain: events with
//! optional capacity, invitations with tokens and expiry, response
//! processing, occupancy classification, and edit permissions.

pub mod config;
pub mod core_event;
pub mod logging;

pub use config::{Config, ConfigError, InviteConfig, LoggingConfig};
pub use core_event::{
    EditPermission, EditPermissionService, Event, EventError, EventId, EventRegistry,
    EventStatusCalculator, Invitation, InvitationId, InvitationValidator, InviteResponse,
    Notifier, OccupancyStatus, Participant, PermissionKind, ProcessingResult, RecordingNotifier,
    RegistryError, ResponseProcessor, RsvpState, SentEmail, Timestamp, User, UserId,
    ValidationResult,
};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogLevel};
