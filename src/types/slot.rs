//! Availability types consumed from the scheduling collaborator

use serde::{Deserialize, Serialize};

/// A bookable start/end pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// "HH:MM"
    pub start: String,
    /// "HH:MM"
    pub end: String,
    pub available_techs: u32,
}

/// Whether a booking has to stay past closing, and for how many work days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvernightInfo {
    pub overnight: bool,
    /// Always >= 1
    pub estimated_days: u32,
}

impl OvernightInfo {
    pub fn same_day() -> Self {
        Self {
            overnight: false,
            estimated_days: 1,
        }
    }
}

/// Availability response for one service on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub business_hours_close: Option<String>,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

/// A slot annotated with its overnight implication
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotEstimate {
    pub slot: TimeSlot,
    pub overnight: OvernightInfo,
}
