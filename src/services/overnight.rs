//! Overnight (multi-day) stay calculation
//!
//! Converts a slot start, a service duration and the closing time into the
//! number of abstract work days the vehicle stays. Days after the first are
//! assumed to offer a fixed number of work minutes; weekends and holidays are
//! not modelled.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::types::{AvailabilityWindow, CatalogError, OvernightInfo, Result, SlotEstimate};

/// Work minutes in every day after the first (10 hours)
pub const DEFAULT_WORKDAY_MINUTES: u32 = 600;

/// Intermediate values of an overnight calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OvernightEstimate {
    /// Negative when the slot starts at or after closing
    pub minutes_until_close: i64,
    /// 0 when the service fits the first day
    pub remaining_minutes: i64,
    pub additional_days: u32,
    #[serde(flatten)]
    pub info: OvernightInfo,
}

/// Parse "HH:MM" into a time of day
pub fn parse_hhmm(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| CatalogError::InvalidTime(format!("'{}': {}", value, e)))
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

/// Overnight calculator with a configurable work-day length
#[derive(Debug, Clone, Copy)]
pub struct OvernightCalculator {
    workday_minutes: u32,
}

impl OvernightCalculator {
    pub fn new() -> Self {
        Self::with_workday_minutes(DEFAULT_WORKDAY_MINUTES)
    }

    /// A zero-length work day is clamped to one minute
    pub fn with_workday_minutes(workday_minutes: u32) -> Self {
        Self {
            workday_minutes: workday_minutes.max(1),
        }
    }

    pub fn workday_minutes(&self) -> u32 {
        self.workday_minutes
    }

    /// Estimate the stay for a service starting at `start`.
    ///
    /// A start at or after `close` is not special-cased: the negative
    /// minutes-until-close simply inflates the remaining work.
    pub fn estimate(
        &self,
        start: NaiveTime,
        duration_minutes: u32,
        close: NaiveTime,
    ) -> OvernightEstimate {
        let minutes_until_close = minutes_since_midnight(close) - minutes_since_midnight(start);
        let duration = i64::from(duration_minutes);

        if duration <= minutes_until_close {
            return OvernightEstimate {
                minutes_until_close,
                remaining_minutes: 0,
                additional_days: 0,
                info: OvernightInfo::same_day(),
            };
        }

        // remaining > 0 here
        let remaining_minutes = duration - minutes_until_close;
        let workday = u64::from(self.workday_minutes);
        let additional = (remaining_minutes as u64).div_ceil(workday);
        let additional_days = u32::try_from(additional).unwrap_or(u32::MAX);

        OvernightEstimate {
            minutes_until_close,
            remaining_minutes,
            additional_days,
            info: OvernightInfo {
                overnight: true,
                estimated_days: additional_days.saturating_add(1),
            },
        }
    }

    /// [`estimate`](Self::estimate) with "HH:MM" strings
    pub fn estimate_str(
        &self,
        start: &str,
        duration_minutes: u32,
        close: &str,
    ) -> Result<OvernightEstimate> {
        let start = parse_hhmm(start)?;
        let close = parse_hhmm(close)?;
        Ok(self.estimate(start, duration_minutes, close))
    }

    /// Pair every slot of an availability window with its overnight info.
    /// `fallback_close` is used when the window carries no closing time.
    pub fn annotate_slots(
        &self,
        window: &AvailabilityWindow,
        fallback_close: &str,
    ) -> Result<Vec<SlotEstimate>> {
        let close = parse_hhmm(
            window
                .business_hours_close
                .as_deref()
                .unwrap_or(fallback_close),
        )?;

        window
            .slots
            .iter()
            .map(|slot| {
                let start = parse_hhmm(&slot.start)?;
                Ok(SlotEstimate {
                    slot: slot.clone(),
                    overnight: self.estimate(start, window.duration_minutes, close).info,
                })
            })
            .collect()
    }
}

impl Default for OvernightCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Overnight info with the default 600-minute work day
pub fn overnight_info(start: &str, duration_minutes: u32, close: &str) -> Result<OvernightInfo> {
    Ok(OvernightCalculator::new()
        .estimate_str(start, duration_minutes, close)?
        .info)
}
