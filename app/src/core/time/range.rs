use std::fmt::Display;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sampling resolution understood by the sensor API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[display("seconds")]
    Seconds,
    #[display("minutes")]
    Minutes,
    #[display("hours")]
    Hours,
    #[display("days")]
    Days,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleRange {
    start: chrono::DateTime<FixedOffset>,
    end: chrono::DateTime<FixedOffset>,
    granularity: Granularity,
    frequency: Option<u32>,
}

impl SampleRange {
    pub fn new(start: &str, granularity: Granularity, end: &str) -> Result<Self> {
        let start = parse_iso(start)?;
        let end = parse_iso(end)?;

        if end < start {
            return Err(Error::InvalidRange);
        }

        Ok(Self {
            start,
            end,
            granularity,
            frequency: None,
        })
    }

    /// Only every n-th sample is returned by the API.
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn start(&self) -> &chrono::DateTime<FixedOffset> {
        &self.start
    }

    pub fn end(&self) -> &chrono::DateTime<FixedOffset> {
        &self.end
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn frequency(&self) -> Option<u32> {
        self.frequency
    }

    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339()
    }

    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339()
    }

    pub fn duration_seconds(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 1000.0
    }
}

impl Display for SampleRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} by {}", self.start_iso(), self.end_iso(), self.granularity)?;

        if let Some(frequency) = self.frequency {
            write!(f, " every {}", frequency)?;
        }

        Ok(())
    }
}

fn parse_iso(iso8601: &str) -> Result<chrono::DateTime<FixedOffset>> {
    chrono::DateTime::parse_from_rfc3339(iso8601).map_err(|_| Error::InvalidTimestamp(iso8601.to_owned()))
}
