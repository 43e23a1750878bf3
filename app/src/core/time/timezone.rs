use std::fmt::Display;

use chrono::{FixedOffset, NaiveDateTime, TimeZone};

use crate::{Error, Result};

/// Where the local UTC offset comes from when none is given explicitly.
pub trait TimezoneSource {
    fn utc_offset_minutes(&self) -> i32;
}

/// Offset of the host's local wall clock at the moment of the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimezone;

impl TimezoneSource for SystemTimezone {
    fn utc_offset_minutes(&self) -> i32 {
        chrono::Local::now().offset().local_minus_utc() / 60
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedTimezone(pub i32);

impl TimezoneSource for FixedTimezone {
    fn utc_offset_minutes(&self) -> i32 {
        self.0
    }
}

/// Offset rendered as `[+-]HH:MM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    pub fn to_fixed_offset(&self) -> Option<FixedOffset> {
        self.minutes.checked_mul(60).and_then(FixedOffset::east_opt)
    }

    /// Wall-clock time in this offset as an ISO-8601 timestamp.
    pub fn format(&self, local: NaiveDateTime) -> Result<String> {
        let offset = self
            .to_fixed_offset()
            .ok_or_else(|| Error::InvalidTimezone(self.to_string()))?;

        offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.to_rfc3339())
            .ok_or_else(|| Error::InvalidTimezone(self.to_string()))
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let total = self.minutes.unsigned_abs();

        write!(f, "{}{:02}:{:02}", sign, total / 60, total % 60)
    }
}
