use std::fmt::Display;

use crate::core::time::{SampleRange, TimezoneSource};
use crate::core::unit::{Cost, Joule, KiloWattHours, Watt};
use crate::sensor::{Sample, SensorClient};
use crate::{Error, Result};

use super::Aggregator;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Reduction {
    sum: f64,
    count: usize,
}

//Series ends at the first missing entry. Absent fields add nothing but the sample still counts.
fn reduce(samples: &[Option<Sample>], field: impl Fn(&Sample) -> Option<f64>) -> Reduction {
    samples
        .iter()
        .map_while(Option::as_ref)
        .fold(Reduction::default(), |acc, sample| Reduction {
            sum: acc.sum + field(sample).unwrap_or(0.0),
            count: acc.count + 1,
        })
}

impl<C, Z> Aggregator<C, Z>
where
    C: SensorClient,
    Z: TimezoneSource,
{
    /// Estimate from average consumption power over the range.
    pub async fn get_kwh(&self, range: &SampleRange) -> Result<KiloWattHours> {
        let reduction = self.reduce_samples(range, |s| s.consumption_power).await?;
        let kwh = average_power_kwh(range, reduction)?;

        self.report("kwh consumed", range, reduction, &kwh);
        Ok(kwh)
    }

    /// Exact consumption from the energy counters of the stats endpoint.
    pub async fn get_kwh_consumed(&self, range: &SampleRange) -> Result<KiloWattHours> {
        let reduction = self.reduce_energy_stats(range, |s| s.consumption_energy).await?;
        let kwh = Joule(reduction.sum).to_kwh();

        self.report("kwh consumed from stats", range, reduction, &kwh);
        Ok(kwh)
    }

    pub async fn get_kwh_generated(&self, range: &SampleRange) -> Result<KiloWattHours> {
        let reduction = self.reduce_samples(range, |s| s.generation_power).await?;
        let kwh = average_power_kwh(range, reduction)?;

        self.report("kwh generated", range, reduction, &kwh);
        Ok(kwh)
    }

    pub async fn get_energy_consumed(&self, range: &SampleRange) -> Result<Joule> {
        let reduction = self.reduce_samples(range, |s| s.consumption_energy).await?;
        let energy = Joule(reduction.sum);

        self.report("energy consumed", range, reduction, &energy);
        Ok(energy)
    }

    pub async fn get_energy_generated(&self, range: &SampleRange) -> Result<Joule> {
        let reduction = self.reduce_samples(range, |s| s.generation_energy).await?;
        let energy = Joule(reduction.sum);

        self.report("energy generated", range, reduction, &energy);
        Ok(energy)
    }

    pub async fn get_power_consumed(&self, range: &SampleRange) -> Result<Watt> {
        let reduction = self.reduce_samples(range, |s| s.consumption_power).await?;
        let power = Watt(reduction.sum);

        self.report("power consumed", range, reduction, &power);
        Ok(power)
    }

    /// Cost of [`Self::get_kwh`] at the flat rate.
    pub async fn get_cost(&self, range: &SampleRange) -> Result<Cost> {
        let rate = self.configured_rate()?;
        let cost = self.get_kwh(range).await? * rate;

        tracing::debug!("Cost for {} at rate {}: {}", range, rate, cost);
        Ok(cost)
    }

    /// Cost of [`Self::get_kwh_consumed`] at the flat rate.
    pub async fn get_flat_cost(&self, range: &SampleRange) -> Result<Cost> {
        let rate = self.configured_rate()?;
        let cost = self.get_kwh_consumed(range).await? * rate;

        tracing::debug!("Flat cost for {} at rate {}: {}", range, rate, cost);
        Ok(cost)
    }

    fn configured_rate(&self) -> Result<f64> {
        if self.rate == 0.0 {
            tracing::warn!("Cost requested but no flat rate is configured");
            return Err(Error::RateNotConfigured);
        }

        Ok(self.rate)
    }

    async fn reduce_samples(
        &self,
        range: &SampleRange,
        field: impl Fn(&Sample) -> Option<f64>,
    ) -> Result<Reduction> {
        let samples = self.client.fetch_samples(range).await.map_err(Error::SensorApi)?;
        Ok(reduce(&samples, field))
    }

    async fn reduce_energy_stats(
        &self,
        range: &SampleRange,
        field: impl Fn(&Sample) -> Option<f64>,
    ) -> Result<Reduction> {
        let samples = self
            .client
            .fetch_energy_stats(range, self.stats_paging.page_size, self.stats_paging.page_limit)
            .await
            .map_err(Error::SensorApi)?;

        Ok(reduce(&samples, field))
    }

    fn report(&self, metric: &str, range: &SampleRange, reduction: Reduction, result: &impl Display) {
        if self.debug {
            tracing::info!(
                "{} for {}: {} from {} samples summing to {}",
                metric,
                range,
                result,
                reduction.count,
                reduction.sum
            );
        } else {
            tracing::debug!("{} for {}: {} from {} samples", metric, range, result, reduction.count);
        }
    }
}

//Average power over the range scaled to its duration, not an integral over the samples.
fn average_power_kwh(range: &SampleRange, reduction: Reduction) -> Result<KiloWattHours> {
    if reduction.count == 0 {
        return Err(Error::NoData(range.to_string()));
    }

    let hours = range.duration_seconds() / SECONDS_PER_HOUR;
    Ok(KiloWattHours(
        Watt(reduction.sum).to_kilowatts() * hours / reduction.count as f64,
    ))
}
