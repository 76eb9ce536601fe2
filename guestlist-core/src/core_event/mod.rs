//! Event & Invitation Management
//!
//! Core data structures and decision logic for events, invitations, and
//! RSVP processing.
//!
//! ## Architecture
//!
//! - **Event**: capacity-limited participant roster with date validation
//! - **Invitation**: token/expiry holder bound to one event by id
//! - **ResponseProcessor**: the single writer driving invitation and event
//!   state transitions together
//! - **EventRegistry**: in-memory owner of both, and the serialization
//!   boundary when an event is shared across invitations
//!
//! Classification queries (occupancy status, edit permissions) are pure
//! and side-effect free.

pub mod event;
pub mod invitation;
pub mod notifier;
pub mod permission;
pub mod processor;
pub mod registry;
pub mod status;
pub mod types;
pub mod validator;

pub use event::{Event, EventError, Participant};
pub use invitation::{Invitation, InviteResponse, RsvpState, VALID_TOKEN_PREFIX};
pub use notifier::{Notifier, RecordingNotifier, SentEmail};
pub use permission::{EditPermission, EditPermissionService, PermissionKind, User};
pub use processor::{ProcessingResult, ResponseProcessor};
pub use registry::{EventRegistry, RegistryError};
pub use status::{EventStatusCalculator, OccupancyStatus};
pub use types::{EventId, InvitationId, Timestamp, UserId};
pub use validator::{InvitationValidator, ValidationResult};
