//! Service duration derived from catalog labor hours

use crate::types::ServiceRecord;

/// Duration used when a service carries no usable labor time
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Labor hours converted to whole minutes (truncated).
///
/// Missing, non-finite or non-positive hours fall back to `default_minutes`.
pub fn service_duration_minutes(labor_hours: Option<f64>, default_minutes: u32) -> u32 {
    match labor_hours {
        Some(hours) if hours.is_finite() && hours > 0.0 => {
            let minutes = (hours * 60.0).trunc();
            if minutes >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                minutes as u32
            }
        }
        _ => default_minutes,
    }
}

impl ServiceRecord {
    pub fn duration_minutes(&self, default_minutes: u32) -> u32 {
        service_duration_minutes(self.labor_hours, default_minutes)
    }
}
