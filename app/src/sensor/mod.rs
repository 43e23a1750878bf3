#![allow(async_fn_in_trait)]

mod adapter;

pub use adapter::http::{SensorApiClient, SensorApiConfig};

use serde::{Deserialize, Serialize};

use crate::core::time::SampleRange;

/// One measurement as reported by the sensor API. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub timestamp: Option<String>,
    pub consumption_power: Option<f64>,
    pub consumption_energy: Option<f64>,
    pub generation_power: Option<f64>,
    pub generation_energy: Option<f64>,
}

/// Connected, authenticated access to the sensor vendor's API.
///
/// A `None` entry marks the end of the reported series, anything after it is not part of the result.
pub trait SensorClient {
    async fn fetch_samples(&self, range: &SampleRange) -> anyhow::Result<Vec<Option<Sample>>>;

    async fn fetch_energy_stats(
        &self,
        range: &SampleRange,
        page_size: u32,
        page_limit: u32,
    ) -> anyhow::Result<Vec<Option<Sample>>>;
}
