use anyhow::Context;
use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use infrastructure::MonitoringConfig;
use serde::Deserialize;

use crate::aggregator::{Aggregator, StatsPaging};
use crate::sensor::{SensorApiClient, SensorApiConfig};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub sensor_api: SensorApiConfig,
    #[serde(default)]
    pub aggregator: AggregatorSettings,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregatorSettings {
    #[serde(default)]
    pub rate: f64,
    pub timezone_offset_minutes: Option<i32>,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub stats_paging: StatsPaging,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::layered(File::with_name("config.toml"), environment())
    }

    /// `SENSOR_ENERGY_AGGREGATOR__RATE` overrides `aggregator.rate` of the file source.
    fn layered<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let builder = Config::builder().add_source(file).add_source(env);

        let s = builder.build()?;
        s.try_deserialize()
    }

    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn new_aggregator(&self) -> anyhow::Result<Aggregator<SensorApiClient>> {
        let client = self
            .sensor_api
            .new_client()
            .context("Error creating sensor API client")?;

        let mut builder = Aggregator::builder()
            .client(client)
            .rate(self.aggregator.rate)
            .debug(self.aggregator.debug)
            .stats_paging(self.aggregator.stats_paging);

        if let Some(offset_minutes) = self.aggregator.timezone_offset_minutes {
            builder = builder.timezone(offset_minutes);
        }

        let aggregator = builder.build()?;
        tracing::info!(
            "Aggregator ready for sensor {} with rate {} and timezone {}",
            self.sensor_api.sensor_id,
            aggregator.get_rate(),
            aggregator.get_timezone()
        );

        Ok(aggregator)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SENSOR_ENERGY")
        .prefix_separator("_")
        .separator("__")
}
