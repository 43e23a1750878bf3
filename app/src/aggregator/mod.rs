mod metrics;


use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::core::time::{SystemTimezone, TimezoneSource, UtcOffset};
use crate::sensor::SensorClient;
use crate::{Error, Result};

/// Paging used when fetching energy statistics. Both values must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsPaging {
    pub page_size: u32,
    pub page_limit: u32,
}

impl Default for StatsPaging {
    fn default() -> Self {
        Self {
            page_size: 500,
            page_limit: 10,
        }
    }
}

/// Derived energy metrics on top of a connected sensor client.
///
/// A rate of `0` means no flat rate is configured.
pub struct Aggregator<C, Z = SystemTimezone> {
    client: C,
    rate: f64,
    timezone: UtcOffset,
    timezone_source: Z,
    stats_paging: StatsPaging,
    debug: bool,
}

pub struct AggregatorBuilder<C, Z> {
    client: Option<C>,
    rate: f64,
    timezone: Option<i32>,
    timezone_source: Z,
    stats_paging: StatsPaging,
    debug: bool,
}

impl<C> Aggregator<C, SystemTimezone> {
    pub fn builder() -> AggregatorBuilder<C, SystemTimezone> {
        AggregatorBuilder {
            client: None,
            rate: 0.0,
            timezone: None,
            timezone_source: SystemTimezone,
            stats_paging: StatsPaging::default(),
            debug: false,
        }
    }
}

impl<C, Z> AggregatorBuilder<C, Z>
where
    C: SensorClient,
    Z: TimezoneSource,
{
    pub fn client(mut self, client: C) -> Self {
        self.client = Some(client);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn timezone(mut self, offset_minutes: i32) -> Self {
        self.timezone = Some(offset_minutes);
        self
    }

    pub fn stats_paging(mut self, stats_paging: StatsPaging) -> Self {
        self.stats_paging = stats_paging;
        self
    }

    pub fn timezone_source<T: TimezoneSource>(self, timezone_source: T) -> AggregatorBuilder<C, T> {
        AggregatorBuilder {
            client: self.client,
            rate: self.rate,
            timezone: self.timezone,
            timezone_source,
            stats_paging: self.stats_paging,
            debug: self.debug,
        }
    }

    pub fn build(self) -> Result<Aggregator<C, Z>> {
        let Some(client) = self.client else {
            tracing::error!("Cannot create aggregator without a sensor client");
            return Err(Error::MissingClient);
        };

        if self.stats_paging.page_size == 0 || self.stats_paging.page_limit == 0 {
            tracing::error!("Stats paging needs a non-zero page size and page limit");
            return Err(Error::InvalidPaging(format!(
                "page_size={} page_limit={}",
                self.stats_paging.page_size, self.stats_paging.page_limit
            )));
        }

        let mut aggregator = Aggregator {
            client,
            rate: 0.0,
            timezone: UtcOffset::default(),
            timezone_source: self.timezone_source,
            stats_paging: self.stats_paging,
            debug: self.debug,
        };

        aggregator.set_rate(self.rate)?;
        if let Some(offset_minutes) = self.timezone {
            aggregator.set_timezone(Some(offset_minutes));
        }

        Ok(aggregator)
    }
}

impl<C, Z> Aggregator<C, Z>
where
    C: SensorClient,
    Z: TimezoneSource,
{
    pub fn set_rate(&mut self, rate: f64) -> Result<()> {
        if !rate.is_finite() {
            tracing::error!("Ignoring invalid flat rate {}, keeping {}", rate, self.rate);
            return Err(Error::InvalidRate(rate));
        }

        self.rate = rate;
        Ok(())
    }

    pub fn get_rate(&self) -> f64 {
        self.rate
    }

    /// Without an explicit offset the current local offset of the timezone source is used.
    pub fn set_timezone(&mut self, offset_minutes: Option<i32>) {
        let minutes = offset_minutes.unwrap_or_else(|| self.timezone_source.utc_offset_minutes());
        self.timezone = UtcOffset::from_minutes(minutes);

        tracing::debug!("Timezone set to {}", self.timezone);
    }

    pub fn get_timezone(&self) -> String {
        self.timezone.to_string()
    }

    pub fn format_timestamp(&self, local: NaiveDateTime) -> Result<String> {
        self.timezone.format(local)
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn stats_paging(&self) -> StatsPaging {
        self.stats_paging
    }
}
