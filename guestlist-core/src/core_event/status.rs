//! Occupancy classification for events

use super::event::Event;
use serde::{Deserialize, Serialize};

/// Coarse occupancy classification of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyStatus {
    /// No capacity set
    Unlimited,
    /// 100% of seats taken
    Full,
    /// 80-99% of seats taken
    NearlyFull,
    /// 50-79% of seats taken
    GoodUptake,
    /// 1-49% of seats taken
    SomeConfirmations,
    /// No confirmations yet
    NoConfirmations,
}

/// Derives an [`OccupancyStatus`] from an event
///
/// Bands are checked top-down with inclusive lower bounds; the first match
/// wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventStatusCalculator;

impl EventStatusCalculator {
    pub fn new() -> Self {
        EventStatusCalculator
    }

    pub fn calculate(&self, event: &Event) -> OccupancyStatus {
        if !event.has_limit() {
            return OccupancyStatus::Unlimited;
        }

        let percent = event.occupancy_percent();
        if percent >= 100 {
            OccupancyStatus::Full
        } else if percent >= 80 {
            OccupancyStatus::NearlyFull
        } else if percent >= 50 {
            OccupancyStatus::GoodUptake
        } else if percent > 0 {
            OccupancyStatus::SomeConfirmations
        } else {
            OccupancyStatus::NoConfirmations
        }
    }
}
